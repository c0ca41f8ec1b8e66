//! Source offset recovery
//!
//! html5ever reports no source positions, so the input is fed to the
//! tokenizer in small chunks and every tree event is matched back to the
//! markup consumed since the previous event. Each of `<`, `>`, `&`, `;` and
//! `\r` is fed as a chunk of its own; everything else is fed in runs.
//!
//! The *window* is the source text consumed since the last step that had a
//! visible effect on the tree. Start tags, comments and text created during a
//! step are looked up inside it.

use std::cell::Cell;

/// Chunk boundaries for feeding `source` to the tokenizer
pub(crate) fn chunk_bounds(source: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = source.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let begin = start;
        start = if is_delimiter(bytes[begin]) {
            begin + 1
        } else {
            bytes[begin..]
                .iter()
                .position(|&b| is_delimiter(b))
                .map_or(bytes.len(), |p| begin + p)
        };
        Some((begin, start))
    })
}

#[inline]
fn is_delimiter(b: u8) -> bool {
    matches!(b, b'<' | b'>' | b'&' | b';' | b'\r')
}

#[inline]
fn ends_tag_name(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r' | b'/' | b'>')
}

/// Position bookkeeping shared between the parse driver and the tree sink
#[derive(Debug)]
pub(crate) struct Locator<'s> {
    source: &'s str,
    enabled: bool,
    chunk: Cell<(usize, usize)>,
    window: Cell<usize>,
    touched: Cell<bool>,
    /// `<![CDATA[` sections as `[start of "<", end of "]]>")`
    cdata: Vec<(usize, usize)>,
}

impl<'s> Locator<'s> {
    pub(crate) fn new(source: &'s str, enabled: bool) -> Self {
        let cdata = if enabled { cdata_sections(source) } else { Vec::new() };
        Self {
            source,
            enabled,
            chunk: Cell::new((0, 0)),
            window: Cell::new(0),
            touched: Cell::new(false),
            cdata,
        }
    }

    #[inline]
    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    /// Start a step that feeds `source[start..end]`
    pub(crate) fn enter(&self, start: usize, end: usize) {
        if self.touched.replace(false) {
            self.window.set(self.chunk.get().1);
        }
        self.chunk.set((start, end));
    }

    /// Record that the current step changed the tree
    #[inline]
    pub(crate) fn touch(&self) {
        self.touched.set(true);
    }

    fn window(&self) -> (usize, usize) {
        let (_, end) = self.chunk.get();
        (self.window.get().min(end), end)
    }

    fn last_lt(&self) -> Option<usize> {
        let (from, to) = self.window();
        self.source[from..to].rfind('<').map(|p| from + p)
    }

    /// Offset of a start tag named `local`
    pub(crate) fn element(&self, local: &str) -> usize {
        if !self.enabled {
            return 0;
        }
        let (from, to) = self.window();
        let bytes = self.source.as_bytes();
        let name = local.as_bytes();
        let found = self.source[from..to].rmatch_indices('<').map(|(p, _)| from + p).find(|&lt| {
            let name_end = lt + 1 + name.len();
            name_end <= bytes.len()
                && bytes[lt + 1..name_end].eq_ignore_ascii_case(name)
                && bytes.get(name_end).is_none_or(|&b| ends_tag_name(b))
        });
        found.or_else(|| self.last_lt()).unwrap_or(self.chunk.get().0)
    }

    /// Offset of the `<` that opened a comment
    pub(crate) fn comment(&self) -> usize {
        if !self.enabled {
            return 0;
        }
        let (from, to) = self.window();
        let window = &self.source[from..to];
        ["<!--", "<!", "<?", "</"]
            .iter()
            .find_map(|marker| window.rfind(marker))
            .map(|p| from + p)
            .or_else(|| self.last_lt())
            .unwrap_or(self.chunk.get().0)
    }

    /// Offset of the first character of a new text node holding `content`
    pub(crate) fn text(&self, content: &str) -> usize {
        if !self.enabled {
            return 0;
        }
        let (start, end) = self.chunk.get();
        if let Some(p) = self.source[start..end].find(content) {
            return start + p;
        }
        // `\r\n` and lone `\r` reach the tree as `\n`
        if &self.source[start..end] == "\r" && content.starts_with('\n') {
            return start;
        }
        // Text held back by the tokenizer until this chunk
        if self.source[..start].ends_with(content) {
            return start - content.len();
        }
        // Table text is flushed by the next tag
        if &self.source[start..end] == ">" {
            if let Some(lt) = self.last_lt() {
                if self.source[..lt].ends_with(content) {
                    return lt - content.len();
                }
            }
        }
        // Text that begins with a character reference
        let (from, to) = self.window();
        self.source[from..to].rfind('&').map_or(start, |p| from + p)
    }

    /// The CDATA section the current chunk lies in: `(section index, offset of its "<")`
    pub(crate) fn cdata_section(&self) -> Option<(usize, usize)> {
        let (start, _) = self.chunk.get();
        self.cdata
            .iter()
            .position(|&(open, close)| open < start && start < close)
            .map(|i| (i, self.cdata[i].0))
    }
}

fn cdata_sections(source: &str) -> Vec<(usize, usize)> {
    const OPEN: &str = "<![CDATA[";
    const CLOSE: &str = "]]>";
    let mut sections = Vec::new();
    let mut from = 0;
    while let Some(p) = source[from..].find(OPEN) {
        let open = from + p;
        let body = open + OPEN.len();
        let close = source[body..]
            .find(CLOSE)
            .map_or(source.len() + 1, |q| body + q + CLOSE.len());
        sections.push((open, close));
        from = close.min(source.len());
    }
    sections
}

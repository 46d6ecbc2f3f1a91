//! Ingestion configuration.

/// Options controlling how range text is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Remove everything after a `#` before parsing a line.
    ///
    /// Off by default: a line carrying a trailing comment is then not a
    /// valid CIDR literal and is skipped like any other malformed line.
    pub strip_comments: bool,
}

impl ParseOptions {
    /// Options that strip `#` comments.
    pub fn with_comments() -> Self {
        Self {
            strip_comments: true,
        }
    }

    /// Reduce a raw input line to the candidate CIDR literal.
    pub(crate) fn clean<'a>(&self, line: &'a str) -> &'a str {
        let line = if self.strip_comments {
            match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            }
        } else {
            line
        };
        line.trim()
    }
}

use globset::{Glob, GlobMatcher};

/// Matching mode encoded in a constraint's label key.
///
/// Checked in precedence order: wrapped in `%` markers, `%`-prefixed,
/// `%`-suffixed, literal. Everything except `Literal` selects count mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPattern<'a> {
    /// `%needle%`: label keys containing `needle`.
    Contains(&'a str),
    /// `%needle`: label keys ending in `needle`.
    Suffix(&'a str),
    /// `needle%`: label keys starting with `needle`.
    Prefix(&'a str),
    /// A bare key naming exactly one label.
    Literal(&'a str),
}

impl<'a> KeyPattern<'a> {
    pub fn parse(key: &'a str) -> Self {
        if let Some(inner) = key.strip_prefix('%') {
            match inner.strip_suffix('%') {
                Some(needle) => KeyPattern::Contains(needle),
                None => KeyPattern::Suffix(inner),
            }
        } else if let Some(needle) = key.strip_suffix('%') {
            KeyPattern::Prefix(needle)
        } else {
            KeyPattern::Literal(key)
        }
    }

    /// Compile the derived glob. A needle containing glob metacharacters can
    /// fail to compile; the caller records that on the count result.
    pub fn matcher(&self) -> Result<GlobMatcher, globset::Error> {
        let pattern = match self {
            KeyPattern::Contains(needle) => format!("*{needle}*"),
            KeyPattern::Suffix(needle) => format!("*{needle}"),
            KeyPattern::Prefix(needle) => format!("{needle}*"),
            KeyPattern::Literal(key) => (*key).to_string(),
        };
        Ok(Glob::new(&pattern)?.compile_matcher())
    }
}

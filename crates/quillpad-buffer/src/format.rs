//! Formatting value types attached to the buffer by the editor session.
//!
//! None of these survive a save: plain-text files carry no styling, and the
//! DOCX/PDF exports deliberately write unformatted text. They only shape how
//! the live buffer is displayed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// A (family-name, size) pair applied to the entire buffer at once.
///
/// There is no per-character styling - each font command overwrites the
/// whole setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSetting {
    pub family: String,
    pub size: u16,
}

impl FontSetting {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontSetting {
    fn default() -> Self {
        Self::new("Arial", 12)
    }
}

impl fmt::Display for FontSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

/// Paragraph justification.
///
/// Only the exact lowercase keywords "left", "center" and "right" parse;
/// anything else is rejected and the alignment command ignores it silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl FromStr for Alignment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        f.write_str(name)
    }
}

/// A named justification marker over a char range of the buffer.
///
/// Tags stack: applying "center" and then "left" leaves both tags present
/// over the full span. Which one wins for display is the session's policy,
/// not the tag's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignTag {
    pub alignment: Alignment,
    pub start: usize,
    pub end: usize,
}

impl AlignTag {
    /// Creates a tag spanning the given char range.
    pub fn spanning(alignment: Alignment, range: Range<usize>) -> Self {
        Self {
            alignment,
            start: range.start,
            end: range.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font() {
        let font = FontSetting::default();
        assert_eq!(font.family, "Arial");
        assert_eq!(font.size, 12);
    }

    #[test]
    fn test_alignment_parses_exact_keywords_only() {
        assert_eq!("left".parse(), Ok(Alignment::Left));
        assert_eq!("center".parse(), Ok(Alignment::Center));
        assert_eq!("right".parse(), Ok(Alignment::Right));

        assert!("Left".parse::<Alignment>().is_err());
        assert!("centre".parse::<Alignment>().is_err());
        assert!(" left".parse::<Alignment>().is_err());
        assert!("".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_tag_spanning() {
        let tag = AlignTag::spanning(Alignment::Center, 0..42);
        assert_eq!(tag.start, 0);
        assert_eq!(tag.end, 42);
        assert_eq!(tag.alignment, Alignment::Center);
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::AlignmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = AlignmentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(AlignmentError(other.to_owned())),
        }
    }
}

/// Pads `text` to `width` columns.
///
/// Length is counted in chars of the whole string, escape codes included.
/// `Left` strips the leading whitespace of `text` and `Right` strips its
/// trailing whitespace; text at least `width` long is never truncated.
pub fn align_text(text: &str, alignment: Alignment, width: usize) -> String {
    let len = text.chars().count();
    let gap = width.saturating_sub(len);
    match alignment {
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
        Alignment::Right => format!("{}{}", " ".repeat(gap), text)
            .trim_end_matches(' ')
            .to_owned(),
        Alignment::Left => format!("{}{}", text, " ".repeat(gap))
            .trim_start_matches(' ')
            .to_owned(),
    }
}

/// Same as [`align_text`] but takes the alignment as a token.
pub fn align_text_token(text: &str, alignment: &str, width: usize) -> Result<String, AlignmentError> {
    Ok(align_text(text, alignment.parse()?, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_and_names_invalid_ones() {
        assert_eq!("center".parse::<Alignment>(), Ok(Alignment::Center));
        assert_eq!(Alignment::Right.to_string(), "right");
        let err = "middle".parse::<Alignment>().expect_err("should fail");
        assert_eq!(err.to_string(), "invalid alignment: middle");
    }

    #[test]
    fn center_puts_text_at_half_the_gap() {
        let aligned = align_text("abc", Alignment::Center, 10);
        assert_eq!(aligned.chars().count(), 10);
        assert_eq!(aligned.find("abc"), Some(3));
        assert_eq!(aligned, "   abc    ");
    }

    #[test]
    fn left_and_right_fill_the_width() {
        assert_eq!(align_text("abc", Alignment::Left, 6), "abc   ");
        assert_eq!(align_text("abc", Alignment::Right, 6), "   abc");
    }

    #[test]
    fn left_strips_leading_whitespace_of_the_text() {
        assert_eq!(align_text("  abc", Alignment::Left, 8), "abc   ");
        assert_eq!(align_text("", Alignment::Left, 4), "");
    }

    #[test]
    fn right_strips_trailing_whitespace_of_the_text() {
        assert_eq!(align_text("abc  ", Alignment::Right, 8), "   abc");
    }

    #[test]
    fn text_wider_than_width_is_kept() {
        assert_eq!(align_text("abcdef", Alignment::Center, 4), "abcdef");
        assert_eq!(align_text("abcdef ", Alignment::Right, 4), "abcdef");
        assert_eq!(align_text("abcdef", Alignment::Left, 4), "abcdef");
    }

    #[test]
    fn token_variant_rejects_unknown_alignment() {
        assert_eq!(align_text_token("ab", "right", 4), Ok("  ab".to_owned()));
        assert_eq!(
            align_text_token("ab", "justify", 4),
            Err(AlignmentError("justify".to_owned()))
        );
    }
}

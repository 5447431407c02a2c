//! Parsing of raw console lines into menu choices and task ids.
//!
//! Everything that can go wrong with typed text is handled here, so the
//! manager only ever sees well-formed [`TaskId`] values.

use crate::task::TaskId;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Menu Choice
// ============================================================================

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    MarkComplete,
    MarkIncomplete,
    Exit,
}

impl MenuChoice {
    /// Highest menu number.
    pub const COUNT: u8 = 7;

    /// All choices in menu order.
    #[must_use]
    pub fn all() -> [MenuChoice; 7] {
        [
            MenuChoice::Add,
            MenuChoice::View,
            MenuChoice::Update,
            MenuChoice::Delete,
            MenuChoice::MarkComplete,
            MenuChoice::MarkIncomplete,
            MenuChoice::Exit,
        ]
    }

    /// Label shown in the menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Task",
            MenuChoice::View => "View Task List",
            MenuChoice::Update => "Update Task",
            MenuChoice::Delete => "Delete Task",
            MenuChoice::MarkComplete => "Mark Task Complete",
            MenuChoice::MarkIncomplete => "Mark Task Incomplete",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Menu number, starting at 1.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::View => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::MarkComplete => 5,
            MenuChoice::MarkIncomplete => 6,
            MenuChoice::Exit => 7,
        }
    }
}

/// Error returned when a line is not a menu number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMenuChoiceError {
    input: String,
}

impl fmt::Display for ParseMenuChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid menu choice: '{}'", self.input)
    }
}

impl std::error::Error for ParseMenuChoiceError {}

impl FromStr for MenuChoice {
    type Err = ParseMenuChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: Option<u8> = s.trim().parse().ok();
        number
            .and_then(|n| MenuChoice::all().into_iter().find(|c| c.number() == n))
            .ok_or_else(|| ParseMenuChoiceError {
                input: s.to_string(),
            })
    }
}

// ============================================================================
// Task IDs
// ============================================================================

/// Why a typed task id was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdInputError {
    /// The text is not an integer at all
    NotANumber,
    /// An integer no task can carry: zero, negative, or too large for an id.
    /// Holds the text as typed.
    NoSuchId(String),
}

/// Parse a typed task id.
///
/// # Example
///
/// ```
/// use tickoff::console::input::{parse_task_id, IdInputError};
/// use tickoff::task::TaskId;
///
/// assert_eq!(parse_task_id(" 4 "), Ok(TaskId::new(4)));
/// assert_eq!(parse_task_id("four"), Err(IdInputError::NotANumber));
/// ```
pub fn parse_task_id(input: &str) -> Result<TaskId, IdInputError> {
    let trimmed = input.trim();
    if !is_integer(trimmed) {
        return Err(IdInputError::NotANumber);
    }
    match trimmed.parse::<u64>() {
        Ok(raw) if raw > 0 => Ok(TaskId::new(raw)),
        _ => Err(IdInputError::NoSuchId(trimmed.to_string())),
    }
}

/// An optional sign followed by at least one ASCII digit.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// True for `y` or `yes`, ignoring case and surrounding whitespace.
#[must_use]
pub fn is_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parses_every_number() {
        for choice in MenuChoice::all() {
            let parsed: MenuChoice = choice.number().to_string().parse().unwrap();
            assert_eq!(parsed, choice);
        }
        assert_eq!(MenuChoice::all().len(), MenuChoice::COUNT as usize);
    }

    #[test]
    fn test_menu_choice_trims_whitespace() {
        assert_eq!(" 2 \n".parse::<MenuChoice>(), Ok(MenuChoice::View));
    }

    #[test]
    fn test_menu_choice_rejects_out_of_range() {
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("-1".parse::<MenuChoice>().is_err());
        assert!("add".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_parse_menu_choice_error_display() {
        let err = "x".parse::<MenuChoice>().unwrap_err();
        assert_eq!(err.to_string(), "invalid menu choice: 'x'");
    }

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("1"), Ok(TaskId::new(1)));
        assert_eq!(parse_task_id("  42\n"), Ok(TaskId::new(42)));
        assert_eq!(parse_task_id("abc"), Err(IdInputError::NotANumber));
        assert_eq!(parse_task_id(""), Err(IdInputError::NotANumber));
        assert_eq!(parse_task_id("1.5"), Err(IdInputError::NotANumber));
    }

    #[test]
    fn test_parse_task_id_non_positive() {
        assert_eq!(parse_task_id("0"), Err(IdInputError::NoSuchId("0".into())));
        assert_eq!(parse_task_id("-3"), Err(IdInputError::NoSuchId("-3".into())));
    }

    #[test]
    fn test_parse_task_id_too_large_is_no_such_id() {
        let huge = "99999999999999999999";
        assert_eq!(parse_task_id(huge), Err(IdInputError::NoSuchId(huge.into())));
        assert_eq!(
            parse_task_id(" -99999999999999999999 "),
            Err(IdInputError::NoSuchId("-99999999999999999999".into()))
        );
    }

    #[test]
    fn test_parse_task_id_accepts_plus_sign() {
        assert_eq!(parse_task_id("+5"), Ok(TaskId::new(5)));
        assert_eq!(parse_task_id("+"), Err(IdInputError::NotANumber));
        assert_eq!(parse_task_id("-"), Err(IdInputError::NotANumber));
        assert_eq!(parse_task_id("1e3"), Err(IdInputError::NotANumber));
    }

    #[test]
    fn test_is_confirmation() {
        assert!(is_confirmation("y"));
        assert!(is_confirmation("YES"));
        assert!(is_confirmation(" Yes \n"));
        assert!(!is_confirmation(""));
        assert!(!is_confirmation("n"));
        assert!(!is_confirmation("yep"));
    }
}

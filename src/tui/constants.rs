//! Named constants for TUI layout and navigation.

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Outer margin around every screen (horizontal, vertical).
pub(crate) const SCREEN_MARGIN: (u16, u16) = (2, 1);

/// Column widths of the invalidation table: ID, Datetime, Status.
pub(crate) const TABLE_COLUMN_WIDTHS: [u16; 3] = [18, 22, 14];

/// Visible width of the path input field.
pub(crate) const INPUT_FIELD_WIDTH: usize = 20;

/// Title of the distribution list.
pub(crate) const LIST_TITLE: &str = "Distribution List";

/// Prompt on the input screen.
pub(crate) const INPUT_PROMPT: &str = "Path to invalidate?";

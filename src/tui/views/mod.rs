//! Screen views for the TUI.
//!
//! Each view draws one screen from `&App` and performs no I/O.

mod input;
mod list;
mod table;

pub use input::render_input;
pub use list::render_list;
pub use table::render_table;

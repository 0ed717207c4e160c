//! Shared navigation state for the list and table screens.

use super::constants::PAGE_SIZE;

/// Trait for list-based navigation state.
///
/// Provides common selection and navigation methods for any view
/// that displays a selectable list of items.
pub trait ListNavigation {
    /// Get the current selection index.
    fn selected(&self) -> usize;

    /// Set the selection index.
    fn set_selected(&mut self, idx: usize);

    /// Get the total number of items.
    fn total(&self) -> usize;

    /// Set the total number of items.
    fn set_total(&mut self, total: usize);

    /// Move selection to the next item.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total.saturating_sub(1) {
            self.set_selected(selected + 1);
        }
    }

    /// Move selection to the previous item.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Ensure selection is within valid bounds.
    fn clamp_selection(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total == 0 {
            self.set_selected(0);
        } else if selected >= total {
            self.set_selected(total.saturating_sub(1));
        }
    }

    /// Move selection up by a page.
    fn page_up(&mut self) {
        self.page_up_by(PAGE_SIZE);
    }

    /// Move selection down by a page.
    fn page_down(&mut self) {
        self.page_down_by(PAGE_SIZE);
    }

    /// Move selection up by `rows` items.
    fn page_up_by(&mut self, rows: usize) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(rows.max(1)));
    }

    /// Move selection down by `rows` items.
    fn page_down_by(&mut self, rows: usize) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 {
            self.set_selected((selected + rows.max(1)).min(total.saturating_sub(1)));
        }
    }

    /// Move to the first item.
    fn go_first(&mut self) {
        self.set_selected(0);
    }

    /// Move to the last item.
    fn go_last(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected(total.saturating_sub(1));
        }
    }
}

/// Base state for simple list navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total(total: usize) -> Self {
        Self { selected: 0, total }
    }

    /// First visible row for a viewport of `height` rows so that the
    /// selection is on screen.
    pub fn window_offset(&self, height: usize) -> usize {
        if height == 0 {
            return self.selected;
        }
        self.selected.saturating_sub(height - 1)
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
    }
}

//! Screen transitions and navigation methods for App.
//!
//! Every method here is a no-op when called from a screen it does not apply
//! to. Remote failures never end the session; they land in the status line.

use super::app::{App, InputScreen, Screen, TableScreen};
use super::constants::PAGE_SIZE;
use super::state::{ListNavigation, ListState};
use super::widgets::TextInput;
use crate::cloudfront::console_url;

/// Rows taken by one list entry: title, description, spacer.
const LIST_ITEM_HEIGHT: u16 = 3;
/// Rows around the list: margins, title, filter, help and status lines.
const LIST_CHROME_HEIGHT: u16 = 7;

impl App {
    // ------------------------------------------------------------------
    // List screen
    // ------------------------------------------------------------------

    /// Open the invalidation table of the selected list entry.
    pub fn select_distribution(&mut self) {
        if !matches!(self.screen, Screen::List) || self.list.filtering {
            return;
        }
        let Some(distribution_id) = self.selected_entry().map(|e| e.distribution_id.clone())
        else {
            self.status.info("No distribution selected");
            return;
        };

        match self.api.list_invalidations(&distribution_id) {
            Ok(invalidations) => {
                tracing::info!(
                    distribution = %distribution_id,
                    invalidations = invalidations.len(),
                    "Opened invalidation table"
                );
                self.screen = Screen::Table(TableScreen::new(distribution_id, invalidations));
            }
            Err(e) => {
                tracing::warn!(distribution = %distribution_id, error = %e, "Listing invalidations failed");
                self.status.error(e.to_string());
            }
        }
    }

    /// Start typing a list filter.
    pub fn start_filter(&mut self) {
        if matches!(self.screen, Screen::List) {
            self.list.filtering = true;
        }
    }

    pub fn filter_push(&mut self, c: char) {
        if self.list.filtering {
            self.list.filter.push(c);
            self.refilter();
        }
    }

    pub fn filter_pop(&mut self) {
        if self.list.filtering {
            self.list.filter.pop();
            self.refilter();
        }
    }

    /// Stop typing and keep the filter applied.
    pub fn accept_filter(&mut self) {
        self.list.filtering = false;
    }

    /// Drop the filter and show every entry again.
    pub fn clear_filter(&mut self) {
        self.list.filtering = false;
        if !self.list.filter.is_empty() {
            self.list.filter.clear();
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let total = self.list.visible_indices(&self.entries).len();
        self.list.nav = ListState::with_total(total);
    }

    // ------------------------------------------------------------------
    // Table screen
    // ------------------------------------------------------------------

    /// Return to the distribution list with its previous selection.
    pub fn back_to_list(&mut self) {
        if matches!(self.screen, Screen::Table(_)) {
            self.screen = Screen::List;
        }
    }

    /// Re-fetch the invalidations shown in the table.
    ///
    /// On failure the previous rows stay visible.
    pub fn refresh(&mut self) {
        let Screen::Table(table) = &mut self.screen else {
            return;
        };
        match self.api.list_invalidations(table.distribution_id()) {
            Ok(invalidations) => {
                tracing::debug!(
                    distribution = %table.distribution_id(),
                    invalidations = invalidations.len(),
                    "Refreshed invalidations"
                );
                table.replace_rows(invalidations);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Refresh failed");
                self.status.error(e.to_string());
            }
        }
    }

    /// Switch to the path-input form with an empty field.
    pub fn start_new_invalidation(&mut self) {
        if !matches!(self.screen, Screen::Table(_)) {
            return;
        }
        if let Screen::Table(table) = std::mem::replace(&mut self.screen, Screen::List) {
            let input = TextInput::new(
                self.settings.placeholder.clone(),
                self.settings.max_path_length,
            );
            self.screen = Screen::Input(InputScreen { table, input });
        }
    }

    /// Open the console page of the selected invalidation.
    ///
    /// Neither the screen nor the selection changes, whatever the outcome.
    pub fn open_selected_in_browser(&mut self) {
        let Screen::Table(table) = &self.screen else {
            return;
        };
        let Some(invalidation) = table.selected() else {
            self.status.info("No invalidation to open");
            return;
        };

        let url = console_url(
            &self.settings.console_region,
            table.distribution_id(),
            &invalidation.id,
        );
        match (self.open_url)(&url) {
            Ok(()) => {
                tracing::info!(%url, "Opened console");
                self.status.info(format!("Opened {}", invalidation.id));
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "Opening console failed");
                self.status.error(e.to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Input screen
    // ------------------------------------------------------------------

    /// Create an invalidation for the entered path, then show the table.
    ///
    /// The text is submitted as typed. When the create call fails the form
    /// stays open with its text so it can be corrected.
    pub fn submit_invalidation(&mut self) {
        let Screen::Input(form) = &self.screen else {
            return;
        };
        let distribution_id = form.distribution_id().to_string();
        let path_pattern = form.input().value();

        let created = match self.api.create_invalidation(&distribution_id, &path_pattern) {
            Ok(created) => created,
            Err(e) => {
                tracing::warn!(distribution = %distribution_id, path = %path_pattern, error = %e, "Create failed");
                self.status.error(e.to_string());
                return;
            }
        };
        tracing::info!(
            distribution = %distribution_id,
            path = %path_pattern,
            invalidation = %created.id,
            "Created invalidation"
        );

        let Screen::Input(form) = std::mem::replace(&mut self.screen, Screen::List) else {
            return;
        };
        let mut table = form.table;
        match self.api.list_invalidations(&distribution_id) {
            Ok(invalidations) => {
                table.replace_rows(invalidations);
                self.status.info(format!("Created invalidation {}", created.id));
            }
            Err(e) => {
                // Show the new invalidation even if the listing lags behind
                let mut rows = table.invalidations().to_vec();
                let id = created.id.clone();
                rows.insert(0, created);
                table.replace_rows(rows);
                self.status
                    .error(format!("Created invalidation {id}, but refresh failed: {e}"));
            }
        }
        table.nav.go_first();
        self.screen = Screen::Table(table);
    }

    /// Leave the form without creating anything and re-fetch the table.
    pub fn cancel_input(&mut self) {
        if !matches!(self.screen, Screen::Input(_)) {
            return;
        }
        if let Screen::Input(form) = std::mem::replace(&mut self.screen, Screen::List) {
            self.screen = Screen::Table(form.table);
            self.refresh();
        }
    }

    // ------------------------------------------------------------------
    // Navigation shared by list and table
    // ------------------------------------------------------------------

    fn active_nav(&mut self) -> Option<&mut ListState> {
        match &mut self.screen {
            Screen::List => Some(&mut self.list.nav),
            Screen::Table(table) => Some(&mut table.nav),
            Screen::Input(_) => None,
        }
    }

    /// Rows moved by page-up/page-down on the active screen.
    pub fn page_size(&self) -> usize {
        match &self.screen {
            Screen::Table(_) => usize::from(self.settings.table_height.max(1)),
            _ if self.viewport.1 > LIST_CHROME_HEIGHT => {
                usize::from((self.viewport.1 - LIST_CHROME_HEIGHT) / LIST_ITEM_HEIGHT).max(1)
            }
            _ => PAGE_SIZE,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(nav) = self.active_nav() {
            nav.select_next();
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(nav) = self.active_nav() {
            nav.select_prev();
        }
    }

    pub fn page_down(&mut self) {
        let rows = self.page_size();
        if let Some(nav) = self.active_nav() {
            nav.page_down_by(rows);
        }
    }

    pub fn page_up(&mut self) {
        let rows = self.page_size();
        if let Some(nav) = self.active_nav() {
            nav.page_up_by(rows);
        }
    }

    pub fn go_first(&mut self) {
        if let Some(nav) = self.active_nav() {
            nav.go_first();
        }
    }

    pub fn go_last(&mut self) {
        if let Some(nav) = self.active_nav() {
            nav.go_last();
        }
    }

    pub fn quit(&mut self) {
        tracing::info!(screen = self.screen.name(), "Quit");
        self.should_quit = true;
    }
}

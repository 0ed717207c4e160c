//! Application state for the TUI.
//!
//! The whole session is one [`App`] value. The active [`Screen`] carries its
//! own widget state, and the table and input variants carry the selected
//! distribution id, so there is no way to be on those screens without one.

use crate::cloudfront::{
    distribution_entries, CloudFrontApi, Distribution, DistributionEntry, Invalidation,
    DEFAULT_CONSOLE_REGION,
};
use crate::config::AppConfig;
use crate::error::Result;

use super::state::{ListNavigation, ListState};
use super::status::StatusMessage;
use super::widgets::TextInput;

/// Callback used to open console links, replaceable for tests.
pub type BrowserOpener = Box<dyn FnMut(&str) -> Result<()>>;

/// Settings the screens need from the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub console_region: String,
    pub placeholder: String,
    pub max_path_length: usize,
    pub table_height: u16,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            console_region: DEFAULT_CONSOLE_REGION.to_string(),
            placeholder: "/*".to_string(),
            max_path_length: 156,
            table_height: 7,
        }
    }
}

impl From<&AppConfig> for AppSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            console_region: config.aws.console_region.clone(),
            placeholder: config.invalidation.placeholder.clone(),
            max_path_length: config.invalidation.max_path_length,
            table_height: config.tui.table_height,
        }
    }
}

/// Selection and filter state of the distribution list.
///
/// `nav` indexes into the filtered entries, not into all entries.
#[derive(Debug, Clone, Default)]
pub struct DistributionListState {
    pub nav: ListState,
    pub(crate) filter: String,
    pub(crate) filtering: bool,
}

impl DistributionListState {
    fn new(total: usize) -> Self {
        Self {
            nav: ListState::with_total(total),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether filter text is being typed.
    pub const fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Indices of the entries that pass the current filter.
    pub fn visible_indices(&self, entries: &[DistributionEntry]) -> Vec<usize> {
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.matches(&self.filter))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Invalidation table for one distribution.
#[derive(Debug, Clone)]
pub struct TableScreen {
    distribution_id: String,
    invalidations: Vec<Invalidation>,
    pub nav: ListState,
}

impl TableScreen {
    pub fn new(distribution_id: impl Into<String>, invalidations: Vec<Invalidation>) -> Self {
        let nav = ListState::with_total(invalidations.len());
        Self {
            distribution_id: distribution_id.into(),
            invalidations,
            nav,
        }
    }

    pub fn distribution_id(&self) -> &str {
        &self.distribution_id
    }

    pub fn invalidations(&self) -> &[Invalidation] {
        &self.invalidations
    }

    /// Rendered rows: id, local creation time, status.
    pub fn rows(&self) -> Vec<[String; 3]> {
        self.invalidations.iter().map(Invalidation::row).collect()
    }

    pub fn selected(&self) -> Option<&Invalidation> {
        self.invalidations.get(self.nav.selected())
    }

    /// Swap in freshly fetched rows, keeping the cursor in range.
    pub(crate) fn replace_rows(&mut self, invalidations: Vec<Invalidation>) {
        self.invalidations = invalidations;
        self.nav.set_total(self.invalidations.len());
        self.nav.clamp_selection();
    }
}

/// Path-input form for a new invalidation.
///
/// Keeps the table it was opened from so cancelling or a failed refresh can
/// fall back to the last known rows.
#[derive(Debug, Clone)]
pub struct InputScreen {
    pub(crate) table: TableScreen,
    pub(crate) input: TextInput,
}

impl InputScreen {
    pub fn distribution_id(&self) -> &str {
        self.table.distribution_id()
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }
}

/// The active screen.
#[derive(Debug, Clone)]
pub enum Screen {
    List,
    Table(TableScreen),
    Input(InputScreen),
}

impl Screen {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Table(_) => "table",
            Self::Input(_) => "input",
        }
    }

    /// The selected distribution, when past the list screen.
    pub fn distribution_id(&self) -> Option<&str> {
        match self {
            Self::List => None,
            Self::Table(table) => Some(table.distribution_id()),
            Self::Input(input) => Some(input.distribution_id()),
        }
    }
}

/// Main application state.
pub struct App {
    pub(crate) api: Box<dyn CloudFrontApi>,
    pub(crate) entries: Vec<DistributionEntry>,
    pub(crate) list: DistributionListState,
    pub(crate) screen: Screen,
    pub(crate) settings: AppSettings,
    /// Last known terminal size (width, height)
    pub(crate) viewport: (u16, u16),
    pub(crate) status: StatusMessage,
    pub should_quit: bool,
    pub(crate) open_url: BrowserOpener,
}

impl App {
    /// Build the list screen from already-fetched distributions.
    pub fn new(
        api: Box<dyn CloudFrontApi>,
        distributions: &[Distribution],
        settings: AppSettings,
    ) -> Self {
        let entries = distribution_entries(distributions);
        let list = DistributionListState::new(entries.len());
        Self {
            api,
            entries,
            list,
            screen: Screen::List,
            settings,
            viewport: (0, 0),
            status: StatusMessage::new(),
            should_quit: false,
            open_url: Box::new(super::browser::open_in_browser),
        }
    }

    /// Fetch the distributions and build the initial list screen.
    ///
    /// A failing listing is returned to the caller; there is nothing to show
    /// without it.
    pub fn load(api: Box<dyn CloudFrontApi>, settings: AppSettings) -> Result<Self> {
        let distributions = api.list_distributions()?;
        tracing::info!(
            backend = api.name(),
            distributions = distributions.len(),
            "Loaded distributions"
        );
        Ok(Self::new(api, &distributions, settings))
    }

    /// Replace the browser launcher.
    #[must_use]
    pub fn with_browser_opener(mut self, opener: impl FnMut(&str) -> Result<()> + 'static) -> Self {
        self.open_url = Box::new(opener);
        self
    }

    /// Name of the backend serving remote calls.
    pub fn backend_name(&self) -> &'static str {
        self.api.name()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }

    /// Entries passing the list filter, in display order.
    pub fn visible_entries(&self) -> Vec<&DistributionEntry> {
        self.list
            .visible_indices(&self.entries)
            .into_iter()
            .filter_map(|i| self.entries.get(i))
            .collect()
    }

    pub fn list_state(&self) -> &DistributionListState {
        &self.list
    }

    /// The list entry under the cursor.
    pub fn selected_entry(&self) -> Option<&DistributionEntry> {
        let visible = self.list.visible_indices(&self.entries);
        visible
            .get(self.list.nav.selected())
            .and_then(|&i| self.entries.get(i))
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub const fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudfront::InMemoryCloudFront;

    fn app() -> App {
        let distributions = vec![
            Distribution::new("E1", ["a.com", "b.com"]),
            Distribution::new("E2", Vec::<String>::new()),
        ];
        App::new(
            Box::new(InMemoryCloudFront::new()),
            &distributions,
            AppSettings::default(),
        )
    }

    #[test]
    fn test_starts_on_list() {
        let app = app();
        assert!(matches!(app.screen(), Screen::List));
        assert_eq!(app.entries().len(), 3);
        assert_eq!(app.list_state().nav.total, 3);
        assert_eq!(app.selected_entry().map(|e| e.title()), Some("E1"));
    }

    #[test]
    fn test_visible_entries_follow_filter() {
        let mut app = app();
        app.list.filter = "B.COM".to_string();
        let visible = app.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].description(), "b.com");
    }

    #[test]
    fn test_table_replace_rows_clamps() {
        use chrono::{TimeZone, Utc};
        let at = Utc.timestamp_opt(1_704_103_200, 0).single().unwrap_or_default();
        let mut table = TableScreen::new(
            "E1",
            vec![
                Invalidation::new("I2", at, "InProgress"),
                Invalidation::new("I1", at, "Completed"),
            ],
        );
        table.nav.go_last();
        table.replace_rows(vec![Invalidation::new("I2", at, "Completed")]);
        assert_eq!(table.nav.selected(), 0);
        assert_eq!(table.selected().map(|i| i.id.as_str()), Some("I2"));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = AppConfig::default();
        config.aws.console_region = "eu-west-1".to_string();
        let settings = AppSettings::from(&config);
        assert_eq!(settings.console_region, "eu-west-1");
        assert_eq!(settings.placeholder, "/*");
        assert_eq!(settings.max_path_length, 156);
        assert_eq!(settings.table_height, 7);
    }
}

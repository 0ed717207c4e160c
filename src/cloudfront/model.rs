//! Local records for CloudFront resources.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Description shown for a distribution that has no alternate domain names.
pub const NO_ALIASES_LABEL: &str = "(no aliases)";

/// A CloudFront distribution as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub id: String,
    /// Alternate domain names (CNAMEs), in service order
    pub aliases: Vec<String>,
}

impl Distribution {
    pub fn new<I, S>(id: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

/// One selectable row of the distribution list.
///
/// A distribution with N aliases expands to N entries sharing its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionEntry {
    pub distribution_id: String,
    pub alias: Option<String>,
}

impl DistributionEntry {
    /// Primary line of the list item.
    pub fn title(&self) -> &str {
        &self.distribution_id
    }

    /// Secondary line of the list item.
    pub fn description(&self) -> &str {
        self.alias.as_deref().unwrap_or(NO_ALIASES_LABEL)
    }

    /// Case-insensitive substring match against alias and id.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.distribution_id.to_lowercase().contains(&query)
            || self
                .alias
                .as_deref()
                .is_some_and(|alias| alias.to_lowercase().contains(&query))
    }
}

/// Expand distributions into list entries, one per alias.
pub fn distribution_entries(distributions: &[Distribution]) -> Vec<DistributionEntry> {
    distributions
        .iter()
        .flat_map(|dist| {
            let aliases: Vec<Option<String>> = if dist.aliases.is_empty() {
                vec![None]
            } else {
                dist.aliases.iter().cloned().map(Some).collect()
            };
            aliases.into_iter().map(|alias| DistributionEntry {
                distribution_id: dist.id.clone(),
                alias,
            })
        })
        .collect()
}

/// An invalidation summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invalidation {
    pub id: String,
    pub create_time: DateTime<Utc>,
    /// Service-defined status, e.g. `InProgress` or `Completed`
    pub status: String,
}

impl Invalidation {
    pub fn new(id: impl Into<String>, create_time: DateTime<Utc>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            create_time,
            status: status.into(),
        }
    }

    /// Cells for the invalidation table: ID, local datetime, status.
    pub fn row(&self) -> [String; 3] {
        [
            self.id.clone(),
            format_local_time(&self.create_time),
            self.status.clone(),
        ]
    }
}

/// Render an instant in local time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_local_time(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// A single-path invalidation batch, alive only for one create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationRequest {
    pub path_pattern: String,
    pub caller_reference: String,
}

impl InvalidationRequest {
    /// Number of paths in the batch; always one.
    pub const fn quantity(&self) -> i32 {
        1
    }

    pub fn paths(&self) -> Vec<String> {
        vec![self.path_pattern.clone()]
    }
}

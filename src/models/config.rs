//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_PAGE_BUTTONS};
use crate::services::students::StudentListState;

/// How the command-line front end prints a list page.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_max_page_buttons() -> usize {
    DEFAULT_MAX_PAGE_BUTTONS
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the roster front end.
pub struct RosterConfig {
    /// Path of the roster CSV to load.
    pub students_csv: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default = "default_max_page_buttons")]
    pub max_page_buttons: usize,
    #[serde(default)]
    pub output: OutputFormat,
}

impl RosterConfig {
    /// Fresh list state using the configured page geometry.
    pub fn list_state(&self) -> StudentListState {
        StudentListState::new(self.items_per_page, self.max_page_buttons)
    }
}

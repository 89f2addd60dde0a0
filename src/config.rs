use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Replay a saved page instead of launching a browser
pub const SNAPSHOT_ENV: &str = "JOB_SCOUT_SNAPSHOT";

/// Directory where the live fetcher saves page captures
pub const DEBUG_DIR_ENV: &str = "JOB_SCOUT_DEBUG_DIR";

/// Settings for one scrape run.
///
/// Everything is fixed at build time; the environment can only switch the
/// fetcher to snapshot replay or enable page captures.
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// Job board landing page
    pub board_url: String,
    /// XPath of the tab that lists individual jobs
    pub tab_xpath: String,
    /// CSS selector matching one listing card
    pub card_selector: String,
    /// How long the landing page may take to load
    pub page_load_timeout: Duration,
    /// How long to wait for the tab and for the cards to show up
    pub interaction_timeout: Duration,
    /// Pause after switching tabs so the cards can render
    pub settle_delay: Duration,
    /// Directory holding both dataset files
    pub data_dir: PathBuf,
    pub primary_file: String,
    pub deadline_file: String,
    pub debug_dir: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            board_url: "https://merojob.com/".to_string(),
            tab_xpath: "//button[contains(text(), 'Individual Jobs')]".to_string(),
            card_selector:
                r".rounded-lg.border.bg-card.text-card-foreground.shadow-sm.hover\:shadow-xl"
                    .to_string(),
            page_load_timeout: Duration::from_secs(300),
            interaction_timeout: Duration::from_secs(10),
            settle_delay: Duration::from_secs(40),
            data_dir: PathBuf::from("data"),
            primary_file: "top_jobs.csv".to_string(),
            deadline_file: "by_deadline.csv".to_string(),
            debug_dir: None,
            snapshot: None,
        }
    }
}

impl ScoutConfig {
    /// Default settings with the data directory placed next to the executable
    pub fn from_env() -> Result<Self> {
        let exe = env::current_exe().context("Failed to locate the running executable")?;
        let base = exe.parent().unwrap_or_else(|| Path::new("."));

        Ok(Self {
            data_dir: base.join("data"),
            debug_dir: env::var_os(DEBUG_DIR_ENV).map(PathBuf::from),
            snapshot: env::var_os(SNAPSHOT_ENV).map(PathBuf::from),
            ..Self::default()
        })
    }

    pub fn primary_path(&self) -> PathBuf {
        self.data_dir.join(&self.primary_file)
    }

    pub fn deadline_path(&self) -> PathBuf {
        self.data_dir.join(&self.deadline_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_load_is_not_held_to_the_interaction_budget() {
        let config = ScoutConfig::default();
        assert_eq!(config.interaction_timeout, Duration::from_secs(10));
        assert!(config.page_load_timeout > config.interaction_timeout);
    }

    #[test]
    fn dataset_paths_live_in_data_dir() {
        let config = ScoutConfig {
            data_dir: PathBuf::from("/srv/scout/data"),
            ..ScoutConfig::default()
        };
        assert_eq!(
            config.primary_path(),
            PathBuf::from("/srv/scout/data/top_jobs.csv")
        );
        assert_eq!(
            config.deadline_path(),
            PathBuf::from("/srv/scout/data/by_deadline.csv")
        );
    }
}

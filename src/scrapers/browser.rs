use crate::config::ScoutConfig;
use crate::scrapers::traits::ListingFetcher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

/// A running headless Chrome with one open tab.
///
/// Chrome is shut down when the session is dropped, so every exit path out of
/// a scrape (including a failed wait) releases the browser.
pub struct BrowserSession {
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    pub fn launch() -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .args(vec![OsStr::new("--disable-dev-shm-usage")])
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;
        let tab = browser.new_tab().context("Failed to open browser tab")?;

        Ok(Self { browser, tab })
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        info!("Closing headless Chrome");
    }
}

/// Browser-based fetcher for the merojob "Individual Jobs" board
pub struct BrowserFetcher {
    config: ScoutConfig,
}

impl BrowserFetcher {
    pub fn new(config: ScoutConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ListingFetcher for BrowserFetcher {
    async fn fetch_cards(&self) -> Result<Vec<String>> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || collect_cards(&config))
            .await
            .context("Browser task did not complete")?
    }

    fn source_name(&self) -> &'static str {
        "merojob (live)"
    }
}

/// Drive one browser session from landing page to card text
fn collect_cards(config: &ScoutConfig) -> Result<Vec<String>> {
    let session = BrowserSession::launch()?;
    let tab = session.tab();
    tab.set_default_timeout(config.page_load_timeout);

    info!("Opening {}...", config.board_url);
    tab.navigate_to(&config.board_url)
        .context("Failed to open job board")?;
    tab.wait_until_navigated()
        .context("Job board did not finish loading")?;

    // Only the tab and card waits are held to the short budget
    tab.set_default_timeout(config.interaction_timeout);

    let button = tab
        .wait_for_xpath_with_custom_timeout(&config.tab_xpath, config.interaction_timeout)
        .context("Error clicking Individual Jobs: tab did not appear")?;
    button
        .click()
        .context("Error clicking Individual Jobs")?;

    info!("Waiting {:?} for job cards to render...", config.settle_delay);
    thread::sleep(config.settle_delay);

    let cards = tab
        .wait_for_elements(&config.card_selector)
        .context("Timed out waiting for job cards")?;
    info!("Found {} job cards", cards.len());

    let mut blocks = Vec::with_capacity(cards.len());
    for (idx, card) in cards.iter().enumerate() {
        match card.get_inner_text() {
            Ok(text) => {
                debug!("Card {}: {:?}", idx, text);
                blocks.push(text);
            }
            Err(e) => warn!("Could not read text of card {}: {}", idx, e),
        }
    }

    if let Some(dir) = &config.debug_dir {
        if let Err(e) = save_page(tab, dir) {
            warn!("Failed to save page capture: {:#}", e);
        }
    }

    Ok(blocks)
}

/// Save the rendered page so a run can be replayed offline
fn save_page(tab: &Tab, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let html = tab.get_content().context("Failed to read page HTML")?;
    let path = dir.join("merojob_page.html");
    fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved page HTML to {} ({} bytes)", path.display(), html.len());

    Ok(())
}

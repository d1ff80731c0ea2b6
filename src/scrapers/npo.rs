//! NPO homepage scraper.
//!
//! Scrapes [npo.nl](https://npo.nl/) for currently listed programs. The
//! homepage carries program tiles as anchors wrapping a heading; anchors
//! whose subtree mentions "nieuw" are flagged as new programs.
//!
//! # Extraction rules
//!
//! For every `a[href]` element on the page:
//! - fragment targets (`#...`) and external absolute targets (`http...`) are
//!   skipped
//! - a descendant heading (`h1`-`h6`) is required; its trimmed text is the
//!   title and must be at least 3 characters
//! - the target is resolved against the configured base URL
//! - the description comes from the [`DescriptionClassifier`], falling back
//!   to a fixed placeholder
//!
//! The result is stable-partitioned with new programs first and capped at
//! [`MAX_PROGRAMS`]. Overlapping anchors can yield duplicate programs; they
//! are deliberately not deduplicated.

use crate::catalog;
use crate::config::FeedConfig;
use crate::models::Program;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Upper bound on the number of programs one run may produce.
pub const MAX_PROGRAMS: usize = 20;

/// Description used when nothing extractable is found.
pub const DEFAULT_DESCRIPTION: &str = "Programma op NPO";

/// Case-insensitive marker token flagging a program as new.
const NEW_MARKER: &str = "nieuw";

/// Class-attribute tokens that identify a description element.
const DESCRIPTION_CLASS_TOKENS: [&str; 3] = ["desc", "summary", "text"];

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());
static ANY_ELEMENT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("*").unwrap());

/// Capability for pulling a description out of a program anchor.
///
/// The production heuristic is [`ClassTokenClassifier`]; alternative
/// strategies can be plugged in without touching extraction or
/// orchestration.
pub trait DescriptionClassifier {
    /// Return the description for the given anchor, if one is extractable.
    fn classify(&self, anchor: ElementRef<'_>) -> Option<String>;
}

/// Classifies the first descendant whose class tokens mention a description.
///
/// An element matches when any of its class-attribute tokens
/// case-insensitively contains one of `desc`, `summary`, or `text`. Only the
/// first matching element is consulted; if its text is empty the anchor has
/// no description.
#[derive(Debug, Default)]
pub struct ClassTokenClassifier;

impl DescriptionClassifier for ClassTokenClassifier {
    fn classify(&self, anchor: ElementRef<'_>) -> Option<String> {
        let candidate = anchor.select(&ANY_ELEMENT_SELECTOR).find(|element| {
            element.value().classes().any(|class| {
                let class = class.to_lowercase();
                DESCRIPTION_CLASS_TOKENS
                    .iter()
                    .any(|token| class.contains(token))
            })
        })?;

        let text = collect_text(candidate);
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Fetch the raw homepage markup.
///
/// A single GET with the configured User-Agent. Any transport error or
/// non-2xx status is reported as a fetch failure; the caller treats it the
/// same as an empty extraction and falls back to the seed catalog.
#[instrument(level = "info", skip_all, fields(url = %config.base_url))]
pub async fn fetch_homepage(config: &FeedConfig) -> Result<String, Box<dyn Error>> {
    let response = reqwest::Client::new()
        .get(&config.base_url)
        .header(reqwest::header::USER_AGENT, &config.user_agent)
        .send()
        .await?
        .error_for_status()?;

    let html = response.text().await?;
    debug!(bytes = html.len(), "Fetched NPO homepage");
    Ok(html)
}

/// Extract programs from homepage markup.
///
/// Every program is stamped with `published` as its publication date.
/// Returns at most [`MAX_PROGRAMS`] programs, new ones first, encounter
/// order preserved within each group.
pub fn extract_programs(
    html: &str,
    base_url: &Url,
    classifier: &dyn DescriptionClassifier,
    published: DateTime<Utc>,
) -> Vec<Program> {
    let document = Html::parse_document(html);
    let mut programs = Vec::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        // Skip navigation fragments and external links.
        if href.starts_with('#') || href.starts_with("http") {
            continue;
        }

        let Some(heading) = anchor.select(&HEADING_SELECTOR).next() else {
            continue;
        };
        let title = collect_text(heading);
        if title.chars().count() < 3 {
            continue;
        }

        let link = match base_url.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                debug!(href, error = %e, "Skipping unresolvable program link");
                continue;
            }
        };

        let description = classifier
            .classify(anchor)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let is_new = anchor
            .text()
            .any(|text| text.to_lowercase().contains(NEW_MARKER));

        debug!(%title, is_new, "Found program");
        programs.push(Program {
            title,
            link,
            description,
            is_new,
            published_date: published.to_rfc3339(),
            image: None,
        });
    }

    // Stable partition: new programs first, encounter order kept per group.
    programs.sort_by_key(|program| !program.is_new);
    programs.truncate(MAX_PROGRAMS);
    programs
}

/// Scrape the NPO homepage into a program list.
///
/// This is the fetch-then-extract entry point used by the pipeline. It never
/// fails: a fetch failure substitutes the two-seed fallback catalog, a
/// successful fetch with zero extracted programs substitutes the full seed
/// catalog.
#[instrument(level = "info", skip_all)]
pub async fn scrape_programs(
    config: &FeedConfig,
    classifier: &dyn DescriptionClassifier,
) -> Vec<Program> {
    let published = Utc::now();

    let html = match fetch_homepage(config).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, url = %config.base_url, "Error fetching programs from website");
            return catalog::fetch_failure_catalog(published);
        }
    };

    let base_url = match Url::parse(&config.base_url) {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, url = %config.base_url, "Base URL is not a valid URL");
            return catalog::fetch_failure_catalog(published);
        }
    };

    info!("Scraping NPO homepage for programs");
    let programs = extract_programs(&html, &base_url, classifier, published);
    let new_count = programs.iter().filter(|p| p.is_new).count();
    info!(
        count = programs.len(),
        new_count, "Found programs from website"
    );

    if programs.is_empty() {
        warn!("No programs found, substituting seed catalog");
        return catalog::empty_extraction_catalog(published);
    }
    programs
}

/// Concatenated, trimmed text of all descendant text nodes.
fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

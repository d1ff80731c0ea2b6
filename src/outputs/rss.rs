//! RSS 2.0 feed assembly.
//!
//! Turns an ordered program list into the published feed document. New
//! programs get a "NIEUW: " title prefix; items carry the program's stored
//! publication date, replaced by the current time when it does not parse.
//! Date handling must never abort assembly.

use crate::config::FeedConfig;
use crate::models::Program;
use chrono::{DateTime, Utc};
use rss::validation::Validate;
use rss::{Channel, ChannelBuilder, EnclosureBuilder, Item, ItemBuilder};
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Channel title of the published feed.
pub const FEED_TITLE: &str = "NPO Nieuwe Programma's";

/// Channel description of the published feed.
pub const FEED_DESCRIPTION: &str = "Een RSS feed van nieuwe en recente programma's op NPO";

/// Channel language tag.
pub const FEED_LANGUAGE: &str = "nl";

/// Title prefix marking new programs in the feed.
pub const NEW_TITLE_PREFIX: &str = "NIEUW: ";

/// MIME type attached to image enclosures.
const ENCLOSURE_MIME: &str = "image/jpeg";

/// Assemble the feed channel for an ordered program list.
pub fn build_channel(programs: &[Program], config: &FeedConfig) -> Channel {
    let items: Vec<Item> = programs.iter().map(program_to_item).collect();

    ChannelBuilder::default()
        .title(FEED_TITLE)
        .link(config.start_url.clone())
        .description(FEED_DESCRIPTION)
        .language(Some(FEED_LANGUAGE.to_string()))
        .items(items)
        .build()
}

/// Assemble, validate, and write the feed artifact.
///
/// The previous artifact is fully overwritten. Returns the artifact path.
#[instrument(level = "info", skip_all, fields(path = %config.feed_file.display()))]
pub async fn write_feed(
    programs: &[Program],
    config: &FeedConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let channel = build_channel(programs, config);
    channel.validate()?;

    fs::write(&config.feed_file, channel.to_string()).await?;
    info!(count = programs.len(), "RSS feed generated");
    Ok(config.feed_file.clone())
}

fn program_to_item(program: &Program) -> Item {
    let title = if program.is_new {
        format!("{NEW_TITLE_PREFIX}{}", program.title)
    } else {
        program.title.clone()
    };

    let mut builder = ItemBuilder::default();
    builder
        .title(title)
        .link(program.link.clone())
        .description(program.description.clone())
        .pub_date(parse_published(&program.published_date).to_rfc2822());

    if let Some(image) = &program.image {
        builder.enclosure(
            EnclosureBuilder::default()
                .url(image.clone())
                .mime_type(ENCLOSURE_MIME.to_string())
                .length("0".to_string())
                .build(),
        );
    }

    builder.build()
}

/// Parse a stored publication date, substituting the current time when the
/// value does not parse. Never fails.
fn parse_published(raw: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(e) => {
            warn!(raw, error = %e, "Date parsing error, using current time");
            Utc::now()
        }
    }
}

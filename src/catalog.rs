//! Fallback seed catalog used when scraping produces no programs.
//!
//! The literal contents of these seeds are part of the external contract:
//! feed consumers (and the acceptance tests) match them verbatim.

use crate::models::Program;
use chrono::{DateTime, Utc};

/// One seed entry of the fallback catalog.
#[derive(Debug, Clone, Copy)]
pub struct SeedProgram {
    pub title: &'static str,
    pub link: &'static str,
    pub description: &'static str,
    pub is_new: bool,
}

/// The canonical seed programs, new pair first.
pub const SEED_PROGRAMS: [SeedProgram; 4] = [
    SeedProgram {
        title: "Chateau Promenade",
        link: "https://npo.nl/start/chateau-promenade",
        description: "Diederik Ebbinge ontvangt drie vaste gasten op zijn \
                      schilderachtige Noord-Franse chateau.",
        is_new: true,
    },
    SeedProgram {
        title: "Date On Stage",
        link: "https://npo.nl/start/date-on-stage",
        description: "In deze datingshow gaan singles op zoek naar de liefde.",
        is_new: true,
    },
    SeedProgram {
        title: "Boer zoekt vrouw",
        link: "https://npo.nl/start/boer-zoekt-vrouw",
        description: "Boeren op zoek naar de liefde van hun leven.",
        is_new: false,
    },
    SeedProgram {
        title: "Week van de Lentekriebels",
        link: "https://npo.nl/start/week-van-de-lentekriebels",
        description: "Collectie programma's over de lente.",
        is_new: false,
    },
];

/// Catalog substituted when the homepage fetch itself fails: the new pair.
pub fn fetch_failure_catalog(published: DateTime<Utc>) -> Vec<Program> {
    materialize(&SEED_PROGRAMS[..2], published)
}

/// Catalog substituted when the fetch succeeds but extraction yields nothing.
pub fn empty_extraction_catalog(published: DateTime<Utc>) -> Vec<Program> {
    materialize(&SEED_PROGRAMS, published)
}

fn materialize(seeds: &[SeedProgram], published: DateTime<Utc>) -> Vec<Program> {
    seeds
        .iter()
        .map(|seed| Program {
            title: seed.title.to_string(),
            link: seed.link.to_string(),
            description: seed.description.to_string(),
            is_new: seed.is_new,
            published_date: published.to_rfc3339(),
            image: None,
        })
        .collect()
}

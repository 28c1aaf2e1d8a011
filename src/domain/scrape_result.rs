use serde::Serialize;

use super::{profile::ProfileFields, section_stat::SectionStats};

pub const MISSING_URL_MESSAGE: &str = "URL is required";
pub const SCRAPE_FAILED_MESSAGE: &str = "Failed to scrape data";

/// Body of every `/scrape` response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScrapeResult {
    Success {
        success: bool,
        data: ProfileFields,
        #[serde(rename = "allSectionStats")]
        all_section_stats: SectionStats,
    },
    Failure {
        success: bool,
        message: String,
    },
}

impl ScrapeResult {
    pub fn success(data: ProfileFields, all_section_stats: SectionStats) -> Self {
        ScrapeResult::Success {
            success: true,
            data,
            all_section_stats,
        }
    }

    pub fn failure(message: &str) -> Self {
        ScrapeResult::Failure {
            success: false,
            message: message.to_string(),
        }
    }
}

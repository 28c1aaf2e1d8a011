use actix_web::{get, http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    configuration::ExtractorSettings,
    domain::{totals, ScrapeResult, MISSING_URL_MESSAGE, SCRAPE_FAILED_MESSAGE},
    services::{extractor, FetchError, Fetcher, ParseError},
};

#[derive(Deserialize)]
struct ScrapeQuery {
    url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("no url supplied")]
    MissingUrl,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ResponseError for ScrapeError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::MissingUrl => StatusCode::BAD_REQUEST,
            ScrapeError::Fetch(_) | ScrapeError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ScrapeError::MissingUrl => MISSING_URL_MESSAGE,
            _ => SCRAPE_FAILED_MESSAGE,
        };
        HttpResponse::build(self.status_code()).json(ScrapeResult::failure(message))
    }
}

#[get("/scrape")]
async fn scrape(
    query: web::Query<ScrapeQuery>,
    fetcher: web::Data<Fetcher>,
    extractor_settings: web::Data<ExtractorSettings>,
) -> Result<HttpResponse, ScrapeError> {
    let request_id = Uuid::new_v4();

    let target_url = match query.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => {
            log::info!("[{}] Rejected scrape request without url", request_id);
            return Err(ScrapeError::MissingUrl);
        }
    };
    log::info!("[{}] Scraping {}", request_id, target_url);

    let html = fetcher.fetch(target_url).await.map_err(|e| {
        match e.status() {
            Some(status) => log::error!(
                "[{}] Error scraping (status {}): {}",
                request_id,
                status,
                e
            ),
            None => log::error!("[{}] Error scraping: {}", request_id, e),
        }
        ScrapeError::from(e)
    })?;

    let (data, all_section_stats) = match extractor_settings.strict {
        true => extractor::extract_strict(&html).map_err(|e| {
            log::error!("[{}] Rejected page in strict mode: {}", request_id, e);
            ScrapeError::from(e)
        })?,
        false => extractor::extract(&html),
    };

    let sum = totals(&all_section_stats);
    log::info!(
        "[{}] Extracted {} profile fields, {} sections (right {}, wrong {}, ignored {})",
        request_id,
        data.len(),
        all_section_stats.len(),
        sum.right,
        sum.wrong,
        sum.ignored
    );

    Ok(HttpResponse::Ok().json(ScrapeResult::success(data, all_section_stats)))
}

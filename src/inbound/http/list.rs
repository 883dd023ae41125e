//! `GET /list` — the fizzbuzz rendering endpoint.
//!
//! ```text
//! GET /list?limit=15&int1=3&int2=5&str1=Fizz&str2=Buzz
//! ```
//!
//! Validates the five query parameters, renders the sequence, records the
//! observation, and answers with the sequence as a single text line.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::RawParameters;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Raw query parameters.
///
/// Every field is optional at the transport level so absence surfaces as a
/// validation message rather than a framework-level extraction error.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limit: Option<String>,
    int1: Option<String>,
    int2: Option<String>,
    str1: Option<String>,
    str2: Option<String>,
}

impl From<ListQuery> for RawParameters {
    fn from(query: ListQuery) -> Self {
        Self {
            limit: query.limit.unwrap_or_default(),
            int1: query.int1.unwrap_or_default(),
            int2: query.int2.unwrap_or_default(),
            str1: query.str1.unwrap_or_default(),
            str2: query.str2.unwrap_or_default(),
        }
    }
}

/// Render the requested fizzbuzz sequence and record the observation.
///
/// 400 with the full newline-joined validation report when any parameter is
/// missing or invalid; 500 when the statistic store rejects the write.
#[get("/list")]
pub async fn list_numbers(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let raw = RawParameters::from(query.into_inner());
    let parameters = raw.validate()?;

    let sequence = parameters.render();
    state.statistics.record_observation(&parameters).await?;

    info!(limit = parameters.limit, "fizzbuzz sequence served");
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("{sequence}\n")))
}

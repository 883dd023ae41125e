//! `GET /statistics` — the most requested parameter tuples.
//!
//! ```text
//! GET /statistics
//! ```
//!
//! Reports every tuple tied for the highest hit count, one line per record.

use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Report the most requested parameter tuples.
///
/// The endpoint takes no query parameters; providing any is rejected with
/// 400 so callers do not mistake it for a filtered query. An empty store
/// yields 404.
#[get("/statistics")]
pub async fn get_statistics(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    if !request.query_string().is_empty() {
        return Err(Error::invalid_request("this endpoint does not accept parameter").into());
    }

    let records = state.statistics.top_statistics().await?;
    if records.is_empty() {
        return Err(Error::not_found("there isn't any saved request yet").into());
    }

    let mut body = String::new();
    for (index, record) in records.iter().enumerate() {
        body.push_str(&format!(
            "Request n°{} : {}\n",
            index + 1,
            record.report_line()
        ));
    }

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body))
}

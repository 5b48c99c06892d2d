use serde::Serialize;
use searchlight_api_types::QueryResponse;

use crate::{config::SearchConfig, error::AppResult};

/// Query parameters forwarded to the index. `distinct` asks the provider to
/// collapse hits sharing a grouping key down to the top-ranked one.
#[derive(Serialize)]
struct QueryParams<'a> {
    query: &'a str,
    distinct: bool,
}

#[derive(Serialize)]
struct QueryBody {
    params: String,
}

fn query_url(config: &SearchConfig) -> String {
    format!(
        "https://{}-dsn.algolia.net/1/indexes/{}/query",
        config.application_id, config.index_name
    )
}

fn query_body(query: &str) -> Result<QueryBody, serde_qs::Error> {
    let params = serde_qs::to_string(&QueryParams {
        query,
        distinct: true,
    })?;
    Ok(QueryBody { params })
}

/// Runs one query against the hosted index. Fire-and-forget from the
/// caller's point of view; there is no retry and no abort of superseded
/// requests.
#[cfg(feature = "hydrate")]
pub async fn search_index(config: &SearchConfig, query: &str) -> AppResult<QueryResponse> {
    let response = gloo_net::http::Request::post(&query_url(config))
        .header("X-Algolia-Application-Id", &config.application_id)
        .header("X-Algolia-API-Key", &config.api_key)
        .json(&query_body(query)?)?
        .send()
        .await?
        .json::<QueryResponse>()
        .await?;
    Ok(response)
}

#[cfg(not(feature = "hydrate"))]
pub async fn search_index(config: &SearchConfig, query: &str) -> AppResult<QueryResponse> {
    let response = reqwest::Client::new()
        .post(query_url(config))
        .header("X-Algolia-Application-Id", &config.application_id)
        .header("X-Algolia-API-Key", &config.api_key)
        .json(&query_body(query)?)
        .send()
        .await?
        .json::<QueryResponse>()
        .await?;
    Ok(response)
}

//! Catalog fetch: candidate URLs tried in order, first response that is
//! HTTP-ok and parses as a JSON array wins.

use catalogo::RawRow;
use gloo_net::http::Request;

/// Tries every candidate; failures are logged and swallowed until the
/// list is exhausted, then the last error is surfaced.
pub async fn fetch_catalog_rows(candidates: &[&str]) -> Result<Vec<RawRow>, String> {
    let mut last_err: Option<String> = None;

    for url in candidates {
        match fetch_rows(url).await {
            Ok(rows) => {
                log::info!("catalogo caricato da {url}");
                return Ok(rows);
            }
            Err(e) => {
                log::warn!("tentativo fallito su {url}: {e}");
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| "nessun URL candidato configurato".to_string()))
}

async fn fetch_rows(url: &str) -> Result<Vec<RawRow>, String> {
    // The export is republished under the same file name; a version
    // query parameter defeats intermediate caches.
    let sep = if url.contains('?') { '&' } else { '?' };
    let busted = format!("{url}{sep}v={}", js_sys::Date::now() as u64);

    let response = Request::get(&busted)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;

    catalogo::parse_rows(&text).map_err(|e| format!("{e:#}"))
}

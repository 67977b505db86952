use std::path::Path;

use anyhow::{Context, Result};
use lift_parser::{parse_lift_times, ExtractError, LiftTime, TermColor};

pub const SEARCH_URL: &str = "https://shopcrec.unl.edu/wbwsc/webtrac.wsc/search.html?display=calendar&module=AR&keyword=strength&location=CREC";

/// Downloads the strength search page, or reads a saved copy from `file`.
pub async fn fetch_page(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        log::debug!("Reading search page from {}", path.display());
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    log::debug!("Sending HTTP request to {SEARCH_URL}");
    let html = reqwest::get(SEARCH_URL)
        .await
        .context("Request to the recreation center failed")?
        .error_for_status()?
        .text()
        .await
        .context("Failed to read response body")?;

    log::debug!("Received {} bytes", html.len());

    Ok(html)
}

/// Fetches the search page and extracts its lift times.
///
/// Extraction failures come back as [`ExtractError`]; anything else means the
/// page could not be obtained at all.
pub async fn build_lift_times(file: Option<&Path>) -> Result<Vec<LiftTime>> {
    let html = fetch_page(file).await?;

    Ok(parse_lift_times(html)?)
}

pub fn is_fetch_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ExtractError>().is_none()
}

/// The red notice printed before giving up on an unreachable page.
pub fn fatal_message(err: &anyhow::Error, from_file: bool) -> String {
    let (problem, hint) = if from_file {
        ("Unable to read the saved page.", "Check that the file exists and is readable.")
    } else {
        ("Unable to make proper connection.", "Check that you are connected to the internet.")
    };

    format!(
        "{}{problem}\n{hint}\nTerminating due to error:{} {err:#}",
        TermColor::Red,
        TermColor::Reset
    )
}

//! Reviewed results files shared between `scrape --export` and `send`

use anyhow::{Context, Result};
use outreach_domain::{OutreachResult, RecipientSelection};
use std::path::Path;

/// Write results as pretty JSON
pub async fn write_results(path: &Path, results: &[OutreachResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write results to {}", path.display()))
}

/// Read results written by [`write_results`] (possibly edited by hand)
pub async fn read_results(path: &Path) -> Result<Vec<OutreachResult>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read results from {}", path.display()))?;
    let results: Vec<OutreachResult> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid results file", path.display()))?;

    Ok(results.into_iter().map(recheck_selection).collect())
}

/// A `selected` address edited to something outside the candidates is
/// demoted to `manual`
fn recheck_selection(result: OutreachResult) -> OutreachResult {
    match &result.selection {
        RecipientSelection::Selected { email } => {
            let email = email.clone();
            result.with_recipient(&email)
        }
        _ => result,
    }
}

/// Keep results whose host is in `hosts` (all when empty), case-insensitively
pub fn select_hosts(results: Vec<OutreachResult>, hosts: &[String]) -> Vec<OutreachResult> {
    if hosts.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|result| hosts.iter().any(|h| h.eq_ignore_ascii_case(&result.host)))
        .collect()
}

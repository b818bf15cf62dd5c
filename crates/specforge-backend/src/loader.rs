//! Seeded data loader.
//!
//! Fetches the four seeded tables concurrently, tolerates partial failure,
//! and produces one consolidated [`LoadOutcome`] for the UI. Per-table
//! fetches are raced against a fixed timeout; the loader waits for all four
//! to settle before reporting, so one slow table never blocks the others or
//! causes partial updates. Tables classified as missing are memoized by the
//! caller and short-circuited to a synthetic skipped result on later
//! reloads. Cancellation is advisory: abandoned fetches run to completion
//! and their results are discarded by the load-version gate upstream.

use std::collections::BTreeSet;
use std::time::Duration;

use futures_util::future::join_all;

use specforge_core::{LoadOutcome, Row, SeedTable};

use crate::auth::Session;
use crate::client::TableSource;
use crate::error::BackendError;

/// Deadline for each individual table fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// How one table settled.
enum TableResult {
    Rows(Vec<Row>),
    /// Short-circuited because the table was classified missing earlier.
    Skipped,
    Missing,
    Failed(BackendError),
}

/// Fetch all four seeded tables and consolidate the results.
///
/// `skip` holds tables already classified as missing; they are not queried
/// again. The returned outcome carries the rows, a warning naming missing
/// tables, and a delimited error string for everything else. When no table
/// produced a single row the hint/guidance pair explains the empty
/// dashboard, summarizing access-policy rejections when any occurred.
pub async fn load_seeded_tables<S>(
    source: &S,
    session: &Session,
    skip: &BTreeSet<SeedTable>,
) -> LoadOutcome
where
    S: TableSource + ?Sized,
{
    let fetches = SeedTable::ALL.map(|table| fetch_one(source, session, table, skip));
    let settled = join_all(fetches).await;

    let mut outcome = LoadOutcome::default();
    let mut unavailable: Vec<SeedTable> = skip.iter().copied().collect();
    let mut errors: Vec<String> = Vec::new();
    let mut denied: Vec<(SeedTable, u16)> = Vec::new();
    let mut any_rows = false;

    for (table, result) in SeedTable::ALL.into_iter().zip(settled) {
        match result {
            TableResult::Rows(rows) => {
                any_rows = any_rows || !rows.is_empty();
                *rows_slot(&mut outcome, table) = rows;
            }
            TableResult::Skipped => {}
            TableResult::Missing => {
                outcome.missing.insert(table);
                unavailable.push(table);
            }
            TableResult::Failed(err) => {
                tracing::warn!(%table, %err, "table fetch failed");
                if let Some(status) = err.denied_status() {
                    denied.push((table, status));
                }
                errors.push(format!("{table}: {err}"));
            }
        }
    }

    if !unavailable.is_empty() {
        unavailable.sort();
        unavailable.dedup();
        let names: Vec<&str> = unavailable.iter().map(SeedTable::as_str).collect();
        outcome.warning = Some(format!(
            "Optional tables not found: {}.",
            names.join(", ")
        ));
    }

    if !errors.is_empty() {
        outcome.error = Some(errors.join("; "));
    }
    if !any_rows {
        outcome.hint = Some("All seeded tables returned zero rows.".to_string());
        outcome.guidance = Some(empty_data_guidance(&denied, &session.email));
    }

    outcome
}

/// Fetch a single table: skip memoized tables, race against the timeout,
/// and retry once without ordering when the backend reports an unknown
/// column for the ordered query.
async fn fetch_one<S>(
    source: &S,
    session: &Session,
    table: SeedTable,
    skip: &BTreeSet<SeedTable>,
) -> TableResult
where
    S: TableSource + ?Sized,
{
    if skip.contains(&table) {
        tracing::debug!(%table, "skipping table classified missing earlier");
        return TableResult::Skipped;
    }

    let first = fetch_with_timeout(source, session, table, true).await;
    let result = match first {
        Err(BackendError::UnknownColumn { .. }) => {
            tracing::debug!(%table, "no name column, retrying without ordering");
            fetch_with_timeout(source, session, table, false).await
        }
        other => other,
    };

    match result {
        Ok(rows) => TableResult::Rows(rows),
        Err(err) if err.is_missing_table() => TableResult::Missing,
        Err(err) => TableResult::Failed(err),
    }
}

async fn fetch_with_timeout<S>(
    source: &S,
    session: &Session,
    table: SeedTable,
    ordered: bool,
) -> Result<Vec<Row>, BackendError>
where
    S: TableSource + ?Sized,
{
    match tokio::time::timeout(FETCH_TIMEOUT, source.fetch_table(session, table, ordered)).await {
        Ok(result) => result,
        Err(_) => Err(BackendError::Timeout {
            operation: format!("fetch {table}"),
            seconds: FETCH_TIMEOUT.as_secs(),
        }),
    }
}

fn rows_slot(outcome: &mut LoadOutcome, table: SeedTable) -> &mut Vec<Row> {
    match table {
        SeedTable::Workspaces => &mut outcome.workspaces,
        SeedTable::Modules => &mut outcome.modules,
        SeedTable::Tags => &mut outcome.tags,
        SeedTable::Taxonomy => &mut outcome.taxonomy,
    }
}

/// Guidance for the "signed in but no data" situation.
///
/// When any table was rejected by an access policy the guidance summarizes
/// those rejections and names the current user; otherwise a single generic
/// message recommends checking seed data and workspace membership.
fn empty_data_guidance(denied: &[(SeedTable, u16)], user_email: &str) -> String {
    if denied.is_empty() {
        format!(
            "The account {user_email} signed in but sees no rows. Check that the seed data \
             exists and that the user has a workspace membership linking it to a workspace."
        )
    } else {
        let summary: Vec<String> = denied
            .iter()
            .map(|(table, status)| format!("{table} (HTTP {status})"))
            .collect();
        format!(
            "Likely blocked by an access policy: {} for user {user_email}. \
             Review the row access policies for these tables.",
            summary.join(", ")
        )
    }
}

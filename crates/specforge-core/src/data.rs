//! Dashboard data container.
//!
//! Holds the four seeded row lists plus the consolidated status strings the
//! loader produces. Reloads are gated by a monotonically increasing load
//! version: each reload captures the version at start and its result is
//! discarded when a newer reload began before it settled. Last writer wins
//! by recency of invocation, not completion order.

use std::collections::BTreeSet;
use std::fmt;

use crate::row::Row;

/// The four seeded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeedTable {
    Workspaces,
    Modules,
    Tags,
    Taxonomy,
}

impl SeedTable {
    /// All tables, in load order.
    pub const ALL: [SeedTable; 4] = [
        Self::Workspaces,
        Self::Modules,
        Self::Tags,
        Self::Taxonomy,
    ];

    /// Remote table name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workspaces => "workspaces",
            Self::Modules => "modules",
            Self::Tags => "tags",
            Self::Taxonomy => "taxonomy",
        }
    }
}

impl fmt::Display for SeedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One settled reload: rows per table plus the consolidated status strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub workspaces: Vec<Row>,
    pub modules: Vec<Row>,
    pub tags: Vec<Row>,
    pub taxonomy: Vec<Row>,
    /// Non-fatal notice listing tables classified as missing.
    pub warning: Option<String>,
    /// Aggregated non-missing table errors.
    pub error: Option<String>,
    /// Explanation shown when everything succeeded but returned no rows.
    pub hint: Option<String>,
    /// Actionable follow-up to the hint.
    pub guidance: Option<String>,
    /// Tables newly classified as missing during this reload.
    pub missing: BTreeSet<SeedTable>,
}

/// Seeded data and reload bookkeeping for the dashboard.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub workspaces: Vec<Row>,
    pub modules: Vec<Row>,
    pub tags: Vec<Row>,
    pub taxonomy: Vec<Row>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub hint: Option<String>,
    pub guidance: Option<String>,
    /// True while a reload is in flight.
    pub loading: bool,
    version: u64,
    missing: BTreeSet<SeedTable>,
}

impl DashboardData {
    /// Start a reload. Returns the version the caller must pass back when
    /// the reload settles.
    pub fn begin_reload(&mut self) -> u64 {
        self.version += 1;
        self.loading = true;
        self.version
    }

    /// Tables already classified as missing; reloads skip these.
    #[must_use]
    pub fn missing_tables(&self) -> &BTreeSet<SeedTable> {
        &self.missing
    }

    /// Apply a settled reload. Returns false when a newer reload started in
    /// the meantime, in which case nothing changes except that a matching
    /// in-flight marker never clears state it no longer owns.
    pub fn apply(&mut self, version: u64, outcome: LoadOutcome) -> bool {
        if version != self.version {
            tracing::debug!(version, current = self.version, "discarding stale reload");
            return false;
        }
        self.workspaces = outcome.workspaces;
        self.modules = outcome.modules;
        self.tags = outcome.tags;
        self.taxonomy = outcome.taxonomy;
        self.warning = outcome.warning;
        self.error = outcome.error;
        self.hint = outcome.hint;
        self.guidance = outcome.guidance;
        self.missing.extend(outcome.missing);
        self.loading = false;
        true
    }

    /// Apply an unexpected whole-reload failure: all seeded data resets to
    /// empty and a generic message is shown. Same staleness gate as `apply`.
    pub fn apply_failure(&mut self, version: u64, message: impl Into<String>) -> bool {
        if version != self.version {
            tracing::debug!(version, current = self.version, "discarding stale failure");
            return false;
        }
        self.workspaces.clear();
        self.modules.clear();
        self.tags.clear();
        self.taxonomy.clear();
        self.warning = None;
        self.hint = None;
        self.guidance = None;
        self.error = Some(message.into());
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn outcome_with_workspace(name: &str) -> LoadOutcome {
        LoadOutcome {
            workspaces: vec![json!({"id": 1, "name": name})],
            ..LoadOutcome::default()
        }
    }

    #[test]
    fn newest_reload_wins_regardless_of_completion_order() {
        let mut data = DashboardData::default();
        let a = data.begin_reload();
        let b = data.begin_reload();

        // B settles first, then A straggles in.
        assert!(data.apply(b, outcome_with_workspace("from-b")));
        assert!(!data.apply(a, outcome_with_workspace("from-a")));
        assert_eq!(data.workspaces[0]["name"], "from-b");
        assert!(!data.loading);
    }

    #[test]
    fn stale_reload_is_discarded_even_when_it_settles_first() {
        let mut data = DashboardData::default();
        let a = data.begin_reload();
        let b = data.begin_reload();

        assert!(!data.apply(a, outcome_with_workspace("from-a")));
        // Still loading: B has not settled yet.
        assert!(data.loading);
        assert!(data.apply(b, outcome_with_workspace("from-b")));
        assert_eq!(data.workspaces[0]["name"], "from-b");
    }

    #[test]
    fn failure_clears_all_rows_and_sets_generic_error() {
        let mut data = DashboardData::default();
        let v = data.begin_reload();
        assert!(data.apply(v, outcome_with_workspace("seed")));

        let v = data.begin_reload();
        assert!(data.apply_failure(v, "Failed to load data."));
        assert!(data.workspaces.is_empty());
        assert_eq!(data.error.as_deref(), Some("Failed to load data."));
        assert!(data.warning.is_none());
        assert!(!data.loading);
    }

    #[test]
    fn missing_tables_accumulate_across_reloads() {
        let mut data = DashboardData::default();
        let v = data.begin_reload();
        data.apply(
            v,
            LoadOutcome {
                missing: BTreeSet::from([SeedTable::Tags]),
                ..LoadOutcome::default()
            },
        );
        let v = data.begin_reload();
        data.apply(
            v,
            LoadOutcome {
                missing: BTreeSet::from([SeedTable::Taxonomy]),
                ..LoadOutcome::default()
            },
        );
        assert!(data.missing_tables().contains(&SeedTable::Tags));
        assert!(data.missing_tables().contains(&SeedTable::Taxonomy));
    }
}

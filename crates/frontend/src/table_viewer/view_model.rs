use contracts::table::TableData;
use std::collections::BTreeMap;

/// View state behind the table viewer page.
///
/// Pure state machine: transitions do no I/O, so the fetch/render
/// lifecycle can be unit-tested without a browser. The UI layer owns
/// the signals and the network calls; every mutation goes through the
/// methods below.
///
/// Responses race: two calls can be in flight at once (a table load
/// and a search, or two loads from rapid renames). Each request gets
/// a monotonically increasing sequence number from [`begin_request`],
/// and a completion is applied only if no newer completion has been
/// seen, so the most recently issued request wins regardless of
/// completion order.
///
/// [`begin_request`]: ViewerState::begin_request
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// Name of the table being viewed; empty until the user types one
    pub table_name: String,
    /// Last successfully fetched snapshot, replaced wholesale
    pub table_data: TableData,
    /// Per-column filter values, keyed by column name
    pub filters: BTreeMap<String, String>,
    /// True exactly while the newest issued request is in flight
    pub loading: bool,
    /// User-facing message for the most recent failed call
    pub error: Option<String>,
    issued_seq: u64,
    applied_seq: u64,
}

impl ViewerState {
    /// Start a network call: raises the loading flag, clears any prior
    /// error, and hands out the sequence number the completion must
    /// present to [`apply_success`]/[`apply_failure`].
    ///
    /// [`apply_success`]: ViewerState::apply_success
    /// [`apply_failure`]: ViewerState::apply_failure
    pub fn begin_request(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Apply a successful response. Stale completions (a newer request
    /// already completed) are discarded without touching `table_data`.
    pub fn apply_success(&mut self, seq: u64, data: TableData) {
        if seq <= self.applied_seq {
            return;
        }
        self.applied_seq = seq;
        self.table_data = data;
        if seq == self.issued_seq {
            self.loading = false;
        }
    }

    /// Apply a failed response. The same staleness guard applies; on
    /// the newest completion the last successful `table_data` is kept
    /// and only the error message changes.
    pub fn apply_failure(&mut self, seq: u64, message: String) {
        if seq <= self.applied_seq {
            return;
        }
        self.applied_seq = seq;
        self.error = Some(message);
        if seq == self.issued_seq {
            self.loading = false;
        }
    }

    /// Commit a new table name. Filters deliberately survive a table
    /// switch, even when they reference columns the new table does not
    /// have; clearing them is pending product clarification.
    pub fn set_table_name(&mut self, name: String) {
        self.table_name = name;
    }

    /// Overwrite the filter value for one column, leaving all other
    /// entries untouched. The column is not validated against the
    /// current schema.
    pub fn set_filter(&mut self, column: &str, value: String) {
        self.filters.insert(column.to_string(), value);
    }

    /// Encode the current filters as an `application/x-www-form-urlencoded`
    /// body for the search endpoint.
    pub fn form_body(&self) -> String {
        self.filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

use crate::aggregate::{amount_in_range, compute_totals, Totals};
use crate::filter::scope_filter;
use crate::models::{Appointment, Notification};
use crate::period::{resolve_range, Period};
use chrono::NaiveDateTime;

/// Result of an edit request: either a hand-off target for the
/// navigation collaborator or a notification for the sink.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Navigate { route: String },
    NotFound(Notification),
}

/// Dashboard view state plus the mutation coordinator.
///
/// The visible list is a projection of the store contents through the
/// scope filter, rebuilt on every `reload`; it is never patched in
/// place. The staged-delete slot holds at most one id.
#[derive(Debug, Default)]
pub struct Dashboard {
    period: Period,
    visible: Vec<Appointment>,
    totals: Totals,
    staged_delete: Option<String>,
}

impl Dashboard {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn visible(&self) -> &[Appointment] {
        &self.visible
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn staged_delete(&self) -> Option<&str> {
        self.staged_delete.as_deref()
    }

    /// Rebuilds the scoped list from the full store contents and
    /// recomputes every aggregate.
    pub fn reload(&mut self, records: &[Appointment], now: NaiveDateTime) {
        self.visible = scope_filter(records);
        self.totals = compute_totals(&self.visible, self.period, now);
    }

    /// Switches the aggregation window. Only the monetary total
    /// depends on the toggle; the list and the weekly counter keep
    /// their values.
    pub fn set_period(&mut self, period: Period, now: NaiveDateTime) {
        self.period = period;
        let range = resolve_range(period, now);
        self.totals.period_amount = amount_in_range(&self.visible, &range);
    }

    /// Single lookup with branch-on-presence. A missing id means the
    /// UI is stale (e.g. the record was deleted elsewhere); no
    /// navigation happens, the sink gets an error.
    pub fn request_edit(&self, id: &str) -> EditOutcome {
        if self.visible.iter().any(|record| record.id == id) {
            EditOutcome::Navigate {
                route: format!("/appointments/{id}/edit"),
            }
        } else {
            EditOutcome::NotFound(Notification::error("Error", "Appointment not found."))
        }
    }

    /// Stages an id for deletion; re-staging replaces the held id.
    pub fn stage_delete(&mut self, id: &str) {
        self.staged_delete = Some(id.to_string());
    }

    /// Clears the staged id without touching the store.
    pub fn cancel_delete(&mut self) {
        self.staged_delete = None;
    }

    /// First half of confirm: the full record list with the staged
    /// entry removed, for the caller to persist. Returns `None` when
    /// nothing is staged. The slot is kept until `commit_delete` so a
    /// failed persist leaves the state machine in `Staged`.
    pub fn confirmed_removal(&self, records: &[Appointment]) -> Option<Vec<Appointment>> {
        let staged = self.staged_delete.as_deref()?;
        Some(
            records
                .iter()
                .filter(|record| record.id != staged)
                .cloned()
                .collect(),
        )
    }

    /// Second half of confirm, called once persistence succeeded:
    /// clears the slot, rebuilds the view, reports success.
    pub fn commit_delete(&mut self, records: &[Appointment], now: NaiveDateTime) -> Notification {
        self.staged_delete = None;
        self.reload(records, now);
        Notification::success(
            "Appointment deleted",
            "The appointment was deleted successfully.",
        )
    }
}

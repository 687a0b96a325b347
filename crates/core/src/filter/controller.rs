//! Cascading selector controller.

use serde::{Deserialize, Serialize};

use crate::dashboard::MetricCard;
use crate::rollup::DemandRow;

use super::options::{build_options, OptionOrder};
use super::state::{FilterField, FilterState, Selection};

/// One selector field's live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// Which field this is.
    pub field: FilterField,
    /// The committed selection.
    pub selected: Selection,
    /// The options currently offered, "All" first.
    pub options: Vec<String>,
}

/// Keeps the dependent selector fields consistent.
///
/// Committing field `k` resets every downstream field to "All", clears the
/// pending-only toggle, and recomputes downstream option lists from the
/// rows still matching fields `0..=k`. Runs for the lifetime of the view;
/// there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeController {
    fields: Vec<FieldState>,
    pending_only: bool,
    option_order: OptionOrder,
}

impl CascadeController {
    /// Initial state: every field "All" except the financial year, which
    /// commits to the configured current year.
    #[must_use]
    pub fn new(rows: &[DemandRow], current_year: &str, option_order: OptionOrder) -> Self {
        let fields = FilterField::CASCADE
            .iter()
            .map(|&field| FieldState {
                field,
                selected: Selection::All,
                options: Vec::new(),
            })
            .collect();
        let mut controller = Self {
            fields,
            pending_only: false,
            option_order,
        };
        controller.fields[0].selected = Selection::Value(current_year.to_string());
        controller.rebuild_options_from(0, rows);
        controller
    }

    /// Commits a selection, cascading the reset downstream.
    pub fn select(&mut self, field: FilterField, selection: Selection, rows: &[DemandRow]) {
        let Some(position) = self.fields.iter().position(|f| f.field == field) else {
            return;
        };
        self.fields[position].selected = selection;
        for downstream in &mut self.fields[position + 1..] {
            downstream.selected = Selection::All;
        }
        self.pending_only = false;
        // Field k's own options depend only on fields before it.
        self.rebuild_options_from(position + 1, rows);
    }

    /// Reacts to a summary card click: the pending card toggles the
    /// pending-only view, any other card clears it.
    pub fn toggle_card(&mut self, card: MetricCard) {
        self.pending_only = match card {
            MetricCard::Pending => !self.pending_only,
            _ => false,
        };
    }

    /// The live state of one field.
    #[must_use]
    pub fn field(&self, field: FilterField) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// All fields in cascade order.
    #[must_use]
    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    /// Whether the pending-only view is active.
    #[must_use]
    pub const fn pending_only(&self) -> bool {
        self.pending_only
    }

    /// Snapshot of the committed selections for the aggregator.
    #[must_use]
    pub fn state(&self) -> FilterState {
        let mut state = FilterState::default();
        for field in &self.fields {
            state.set(field.field, field.selected.clone());
        }
        state.pending_only = self.pending_only;
        state
    }

    /// Recomputes options for fields `start..`, each constrained by the
    /// selections committed upstream of it.
    fn rebuild_options_from(&mut self, start: usize, rows: &[DemandRow]) {
        for position in start..self.fields.len() {
            let upstream = self.upstream_state(position);
            let field = self.fields[position].field;
            let values = rows
                .iter()
                .filter(|row| upstream.matches(row))
                .filter_map(|row| field.attribute(row));
            self.fields[position].options = build_options(values, self.option_order);
        }
    }

    /// The filter formed by selections strictly upstream of `position`.
    /// The pending toggle is orthogonal to the cascade and never
    /// constrains option lists.
    fn upstream_state(&self, position: usize) -> FilterState {
        let mut state = FilterState::default();
        for field in &self.fields[..position] {
            state.set(field.field, field.selected.clone());
        }
        state
    }
}

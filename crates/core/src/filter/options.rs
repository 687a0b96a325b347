//! Option list construction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use nidhi_shared::types::Named;

use super::state::Selection;

/// Ordering rule for dropdown option lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionOrder {
    /// Distinct values sorted case-insensitively.
    #[default]
    Alphabetical,
    /// Distinct values in encounter order.
    Insertion,
}

/// Builds a dropdown option list: the "All" sentinel first, then the
/// distinct values in the requested order.
#[must_use]
pub fn build_options<I>(values: I, order: OptionOrder) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut distinct: Vec<String> = Vec::new();
    for value in values {
        if seen.insert(value.clone()) {
            distinct.push(value);
        }
    }
    if order == OptionOrder::Alphabetical {
        distinct.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    }

    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(Selection::ALL_LABEL.to_string());
    options.extend(distinct);
    options
}

/// Builds an option list from reference-data pairs.
#[must_use]
pub fn reference_options<Id>(items: &[Named<Id>], order: OptionOrder) -> Vec<String> {
    build_options(items.iter().map(|item| item.name.clone()), order)
}

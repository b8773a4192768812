//! The whole sheet: ordered rows plus the display currency
//!
//! All edits go through the methods here so the row invariants (twelve
//! non-negative amounts, unique ids, fixed type) hold at every step.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::amount::parse_amount;
use super::currency::Currency;
use super::ids::RowId;
use super::month::Month;
use super::row::{CategoryRow, CategoryType};
use super::template::template_rows;

/// Complete sheet state, as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    rows: Vec<CategoryRow>,
    currency: Currency,
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::template()
    }
}

impl BudgetState {
    /// The built-in template sheet in USD
    pub fn template() -> Self {
        Self {
            rows: template_rows(),
            currency: Currency::Usd,
        }
    }

    /// Build a state from existing rows
    ///
    /// Returns `None` if two rows share an id.
    pub fn from_rows(rows: Vec<CategoryRow>, currency: Currency) -> Option<Self> {
        let state = Self { rows, currency };
        state.has_unique_ids().then_some(state)
    }

    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn row(&self, id: &RowId) -> Option<&CategoryRow> {
        self.rows.iter().find(|r| &r.id == id)
    }

    /// Rows of a given type, in display order
    pub fn rows_of(&self, kind: CategoryType) -> impl Iterator<Item = &CategoryRow> {
        self.rows.iter().filter(move |r| r.kind() == kind)
    }

    /// Find a row by exact id, falling back to a case-insensitive label match
    pub fn find_row(&self, identifier: &str) -> Option<&CategoryRow> {
        let identifier = identifier.trim();
        if let Some(row) = self.rows.iter().find(|r| r.id.as_str() == identifier) {
            return Some(row);
        }

        let lower = identifier.to_lowercase();
        self.rows.iter().find(|r| r.label.to_lowercase() == lower)
    }

    /// True when no two rows share an id
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.rows.len());
        self.rows.iter().all(|r| seen.insert(&r.id))
    }

    /// Write raw input into one cell
    ///
    /// The input is coerced with [`parse_amount`], so invalid text stores 0.
    /// Returns `false` if no row has that id (nothing changes).
    pub fn set_cell_value(&mut self, row_id: &RowId, month: Month, raw_input: &str) -> bool {
        match self.rows.iter_mut().find(|r| &r.id == row_id) {
            Some(row) => {
                row.values.set(month, parse_amount(raw_input));
                true
            }
            None => false,
        }
    }

    /// Append a zeroed row
    ///
    /// A blank label (after trimming) adds nothing and returns `None`.
    pub fn add_row(&mut self, kind: CategoryType, label: &str) -> Option<RowId> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let id = RowId::generate_unique(|candidate| self.row(candidate).is_some());
        self.rows.push(CategoryRow::blank(id.clone(), label, kind));
        Some(id)
    }

    /// Remove a row, returning it if it existed
    pub fn remove_row(&mut self, row_id: &RowId) -> Option<CategoryRow> {
        let position = self.rows.iter().position(|r| &r.id == row_id)?;
        Some(self.rows.remove(position))
    }

    /// Replace everything with a fresh template in USD
    pub fn reset_to_template(&mut self) {
        *self = Self::template();
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }
}

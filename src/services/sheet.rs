//! Sheet service
//!
//! Owns the live [`BudgetState`] and its repository. Every operation that
//! changes the state writes it through to storage before returning; no-op
//! calls (unknown row, blank label) leave storage untouched.

use tracing::debug;

use crate::error::{SheetError, SheetResult};
use crate::models::{BudgetState, CategoryRow, CategoryType, Currency, Month, RowId};
use crate::reports::SheetOverview;
use crate::storage::{KeyValueStore, SheetRepository};

/// Service for sheet editing
pub struct SheetService<S> {
    repository: SheetRepository<S>,
    state: BudgetState,
}

impl<S: KeyValueStore> SheetService<S> {
    /// Start from the saved sheet, or from the template if there is no
    /// usable saved sheet
    pub fn open(repository: SheetRepository<S>) -> Self {
        let state = repository.load().unwrap_or_else(|| {
            debug!("Starting from the template sheet");
            BudgetState::template()
        });
        Self { repository, state }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn repository(&self) -> &SheetRepository<S> {
        &self.repository
    }

    /// All derived totals for the current state
    pub fn overview(&self) -> SheetOverview {
        SheetOverview::generate(&self.state)
    }

    /// Find a row by id or label (case-insensitive)
    pub fn find_row(&self, identifier: &str) -> Option<&CategoryRow> {
        self.state.find_row(identifier)
    }

    /// Like [`find_row`](Self::find_row), but a missing row is an error
    pub fn require_row(&self, identifier: &str) -> SheetResult<&CategoryRow> {
        self.find_row(identifier)
            .ok_or_else(|| SheetError::row_not_found(identifier))
    }

    /// Write raw input into a cell; invalid or negative input stores 0
    ///
    /// Returns `false` (and saves nothing) if the row doesn't exist.
    pub fn set_cell_value(
        &mut self,
        row_id: &RowId,
        month: Month,
        raw_input: &str,
    ) -> SheetResult<bool> {
        if !self.state.set_cell_value(row_id, month, raw_input) {
            return Ok(false);
        }
        debug!(row = %row_id, %month, input = raw_input, "Cell updated");
        self.persist()?;
        Ok(true)
    }

    /// Append a zeroed row; a blank label adds nothing and returns `None`
    pub fn add_row(&mut self, kind: CategoryType, label: &str) -> SheetResult<Option<RowId>> {
        let Some(id) = self.state.add_row(kind, label) else {
            return Ok(None);
        };
        debug!(row = %id, %kind, "Row added");
        self.persist()?;
        Ok(Some(id))
    }

    /// Remove a row if it exists
    pub fn remove_row(&mut self, row_id: &RowId) -> SheetResult<Option<CategoryRow>> {
        let Some(removed) = self.state.remove_row(row_id) else {
            return Ok(None);
        };
        debug!(row = %row_id, "Row removed");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Back to the template in USD; the saved sheet is deleted
    ///
    /// Storage stays empty until the next edit, which is equivalent on the
    /// next start since an absent sheet loads as the template.
    pub fn reset_to_template(&mut self) -> SheetResult<()> {
        self.state.reset_to_template();
        debug!("Sheet reset to template");
        self.repository.clear()
    }

    pub fn set_currency(&mut self, currency: Currency) -> SheetResult<()> {
        if self.state.currency() == currency {
            return Ok(());
        }
        self.state.set_currency(currency);
        debug!(%currency, "Currency changed");
        self.persist()
    }

    fn persist(&mut self) -> SheetResult<()> {
        self.repository.save(&self.state)
    }
}

//! JSON snapshot export
//!
//! A self-describing archive of the sheet: the full state plus the annual
//! figures at export time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SheetError, SheetResult};
use crate::models::{BudgetState, Currency};
use crate::reports::SheetOverview;

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Full sheet snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The sheet, in the persisted layout
    pub sheet: BudgetState,

    pub summary: SnapshotSummary,
}

/// Annual figures at export time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub currency: Currency,
    pub row_count: usize,
    pub annual_income: f64,
    pub annual_expense: f64,
    pub annual_savings: f64,
    pub annual_net: f64,
    pub savings_rate: f64,
    /// Label of the largest expense row, if any
    pub largest_expense: Option<String>,
}

impl SheetSnapshot {
    /// Snapshot the current state
    pub fn from_state(state: &BudgetState) -> Self {
        let overview = SheetOverview::generate(state);

        let summary = SnapshotSummary {
            currency: state.currency(),
            row_count: state.rows().len(),
            annual_income: overview.annual.income,
            annual_expense: overview.annual.expense,
            annual_savings: overview.annual.savings,
            annual_net: overview.annual.net,
            savings_rate: overview.savings_rate,
            largest_expense: overview.largest_expense.map(|row| row.label),
        };

        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            sheet: state.clone(),
            summary,
        }
    }
}

/// Write a JSON snapshot of the sheet
pub fn export_snapshot_json<W: Write>(
    state: &BudgetState,
    writer: &mut W,
    pretty: bool,
) -> SheetResult<()> {
    let snapshot = SheetSnapshot::from_state(state);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &snapshot)
    } else {
        serde_json::to_writer(&mut *writer, &snapshot)
    };
    written.map_err(|e| SheetError::Export(e.to_string()))?;

    writer
        .flush()
        .map_err(|e| SheetError::Export(e.to_string()))
}

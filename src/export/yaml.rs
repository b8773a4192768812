//! YAML snapshot export
//!
//! Same content as the JSON snapshot, in a form that is easier to read.

use std::io::Write;

use crate::error::{SheetError, SheetResult};
use crate::export::json::SheetSnapshot;
use crate::models::BudgetState;

/// Write a YAML snapshot of the sheet
pub fn export_snapshot_yaml<W: Write>(state: &BudgetState, writer: &mut W) -> SheetResult<()> {
    let snapshot = SheetSnapshot::from_state(state);

    writeln!(writer, "# finance-sheet snapshot")
        .and_then(|_| writeln!(writer, "# Generated: {}", snapshot.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", snapshot.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| SheetError::Export(e.to_string()))?;

    serde_yaml::to_writer(&mut *writer, &snapshot)?;

    writer
        .flush()
        .map_err(|e| SheetError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Month, RowId};

    #[test]
    fn test_export_yaml() {
        let mut state = BudgetState::template();
        state.set_currency(Currency::Eur);
        state.set_cell_value(&RowId::from("income-salary"), Month::Jan, "5300.5");

        let mut output = Vec::new();
        export_snapshot_yaml(&state, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# finance-sheet snapshot"));
        assert!(yaml.contains("currency: EUR"));
        assert!(yaml.contains("Housing & Rent"));

        let parsed: SheetSnapshot = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.sheet, state);
    }
}

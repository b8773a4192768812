//! Sheet CLI commands
//!
//! Cell edits, row management, currency and reset.

use clap::Subcommand;

use crate::display::{format_sheet, format_summary};
use crate::error::SheetResult;
use crate::models::{format_money, CategoryType, Currency, Month};
use crate::services::SheetService;
use crate::storage::KeyValueStore;

/// Sheet subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SheetCommands {
    /// Show the full sheet with monthly totals (default)
    Show,

    /// Show annual totals, savings rate and largest expense
    Summary,

    /// Set one cell; invalid or negative amounts store 0
    Set {
        /// Row label or ID
        row: String,
        /// Month ("jan", "January" or 1-12)
        month: Month,
        /// Amount, e.g. "1850" or "12.50"
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Add a row with all months at 0
    Add {
        /// Row type: income, expense or savings
        #[arg(value_name = "TYPE")]
        kind: CategoryType,
        /// Row label
        label: String,
    },

    /// Remove a row
    #[command(alias = "rm")]
    Remove {
        /// Row label or ID
        row: String,
    },

    /// Replace the sheet with the built-in template and forget saved data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Set the display currency (USD, EUR, GBP or CAD)
    Currency {
        code: Currency,
    },
}

/// Handle a sheet command
pub fn handle_sheet_command<S: KeyValueStore>(
    service: &mut SheetService<S>,
    cmd: SheetCommands,
) -> SheetResult<()> {
    match cmd {
        SheetCommands::Show => {
            print!("{}", format_sheet(service.state(), &service.overview()));
        }

        SheetCommands::Summary => {
            print!("{}", format_summary(&service.overview()));
        }

        SheetCommands::Set { row, month, value } => {
            let target = service.require_row(&row)?;
            let (id, label) = (target.id.clone(), target.label.clone());

            service.set_cell_value(&id, month, &value)?;

            let stored = service
                .state()
                .row(&id)
                .map(|r| r.values[month])
                .unwrap_or_default();
            println!(
                "{} {}: {}",
                label,
                month,
                format_money(stored, service.state().currency())
            );
        }

        SheetCommands::Add { kind, label } => match service.add_row(kind, &label)? {
            Some(id) => {
                println!("Added {} row: {}", kind, label.trim());
                println!("  ID: {}", id);
            }
            None => println!("Label is empty; no row added."),
        },

        SheetCommands::Remove { row } => {
            let id = service.require_row(&row)?.id.clone();
            if let Some(removed) = service.remove_row(&id)? {
                println!("Removed row: {}", removed.label);
            }
        }

        SheetCommands::Reset { yes } => {
            if !yes {
                println!("This replaces every row with the template and deletes saved data.");
                println!("Run 'finance-sheet reset --yes' to confirm.");
                return Ok(());
            }
            service.reset_to_template()?;
            println!(
                "Sheet reset to the template ({} rows, {}).",
                service.state().rows().len(),
                service.state().currency()
            );
        }

        SheetCommands::Currency { code } => {
            service.set_currency(code)?;
            println!("Currency set to {} ({})", code, code.symbol());
        }
    }

    Ok(())
}

//! CLI commands for data export

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{SheetError, SheetResult};
use crate::export::{export_csv, export_snapshot_json, export_snapshot_yaml};
use crate::models::BudgetState;

/// Export subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ExportCommands {
    /// Export the grid as CSV for spreadsheet tools
    Csv {
        /// Output file path (defaults to the configured export file name)
        output: Option<PathBuf>,
    },

    /// Export a JSON snapshot of the full sheet
    Json {
        /// Output file path
        output: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Export a YAML snapshot of the full sheet
    Yaml {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(
    state: &BudgetState,
    settings: &Settings,
    cmd: ExportCommands,
) -> SheetResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));
            let mut writer = create_output(&output)?;
            export_csv(state, &mut writer)?;
            println!(
                "Exported {} rows to: {}",
                state.rows().len(),
                output.display()
            );
        }
        ExportCommands::Json { output, pretty } => {
            let mut writer = create_output(&output)?;
            export_snapshot_json(state, &mut writer, pretty)?;
            println!("Snapshot exported to: {}", output.display());
        }
        ExportCommands::Yaml { output } => {
            let mut writer = create_output(&output)?;
            export_snapshot_yaml(state, &mut writer)?;
            println!("Snapshot exported to: {}", output.display());
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> SheetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        SheetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_csv_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("sheet.csv");

        handle_export_command(
            &BudgetState::template(),
            &Settings::default(),
            ExportCommands::Csv {
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("Category,Jan,"));
        assert_eq!(contents.lines().count(), 9);
    }

    #[test]
    fn test_export_json_and_yaml_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("sheet.json");
        let yaml_path = temp_dir.path().join("sheet.yaml");
        let state = BudgetState::template();

        handle_export_command(
            &state,
            &Settings::default(),
            ExportCommands::Json {
                output: json_path.clone(),
                pretty: true,
            },
        )
        .unwrap();
        handle_export_command(
            &state,
            &Settings::default(),
            ExportCommands::Yaml {
                output: yaml_path.clone(),
            },
        )
        .unwrap();

        assert!(std::fs::read_to_string(json_path)
            .unwrap()
            .contains("\"schema_version\""));
        assert!(std::fs::read_to_string(yaml_path)
            .unwrap()
            .contains("schema_version:"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("sheet.csv");

        let err = handle_export_command(
            &BudgetState::template(),
            &Settings::default(),
            ExportCommands::Csv {
                output: Some(output),
            },
        )
        .unwrap_err();
        assert!(matches!(err, SheetError::Export(_)));
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finance_sheet::cli::{
    handle_export_command, handle_sheet_command, ExportCommands, SheetCommands,
};
use finance_sheet::config::{SheetPaths, Settings};
use finance_sheet::services::SheetService;
use finance_sheet::storage::open_file_repository;

#[derive(Parser)]
#[command(
    name = "finance-sheet",
    version,
    about = "Twelve-month personal finance spreadsheet",
    long_about = "finance-sheet tracks income, expense and savings rows across the twelve \
                  months of a year, derives monthly and annual totals, keeps the sheet \
                  on disk between runs and exports it as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Sheet(SheetCommands),

    /// Export the sheet
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finance_sheet=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let paths = SheetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let repository = open_file_repository(&paths, &settings)?;
    let mut service = SheetService::open(repository);

    match cli.command.unwrap_or(Commands::Sheet(SheetCommands::Show)) {
        Commands::Sheet(cmd) => handle_sheet_command(&mut service, cmd)?,
        Commands::Export(cmd) => handle_export_command(service.state(), &settings, cmd)?,
        Commands::Config => {
            println!("finance-sheet Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!(
                "Sheet file:      {}",
                paths.state_file(&settings.storage_key).display()
            );
            println!();
            println!("Settings:");
            println!("  Storage key:      {}", settings.storage_key);
            println!("  CSV export name:  {}", settings.export_file_name);
            println!("  Currency:         {}", service.state().currency());
        }
    }

    Ok(())
}

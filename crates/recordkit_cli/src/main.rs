//! Record programs command-line entry point.
//!
//! # Responsibility
//! - Parse arguments into an `AppConfig` and one program command.
//! - Start file logging when a log directory is given.
//!
//! # Usage
//!
//! ```bash
//! recordkit warehouse
//! recordkit pharmacy --patient 2
//! recordkit inventory-log add 4 "torque wrench" 3
//! recordkit grades --input data/students.txt
//! ```

mod commands;
mod demo;

use clap::{Parser, Subcommand};
use recordkit_core::{init_logging, AppConfig, LogLevel};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "recordkit")]
#[command(about = "Small record-keeping programs over in-memory repositories", long_about = None)]
struct Cli {
    /// Directory holding program data files
    #[arg(long, global = true, default_value = recordkit_core::config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Directory for rolling log files; logging is off when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Warehouse stock add/update/remove walkthrough
    Warehouse,
    /// Show the prescriptions of one patient
    Pharmacy {
        /// Patient id; prompted on stdin when omitted
        #[arg(long)]
        patient: Option<String>,
    },
    /// Per-account transaction summaries
    Finance,
    /// File-backed inventory log
    InventoryLog {
        /// Log file; defaults to <data-dir>/inventory_log.json
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(subcommand)]
        action: LogAction,
    },
    /// Grade a student file and write the report
    Grades {
        /// Input file; defaults to <data-dir>/students.txt
        #[arg(long)]
        input: Option<PathBuf>,
        /// Report file; defaults to <data-dir>/grade_report.txt
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum LogAction {
    /// Append one item and save the log
    Add {
        id: u32,
        name: String,
        quantity: i64,
    },
    /// Print the saved items
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(2);
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Warehouse => commands::run_warehouse(&mut out),
        Commands::Pharmacy { patient } => {
            let stdin = io::stdin();
            commands::run_pharmacy(patient.as_deref(), &mut stdin.lock(), &mut out)
        }
        Commands::Finance => commands::run_finance(&mut out),
        Commands::InventoryLog { file, action } => {
            let path = file.unwrap_or_else(|| config.inventory_log_path());
            match action {
                LogAction::Add { id, name, quantity } => {
                    commands::run_inventory_add(&path, id, &name, quantity, &mut out)
                }
                LogAction::List => commands::run_inventory_list(&path, &mut out),
            }
        }
        Commands::Grades { input, output } => {
            let input = input.unwrap_or_else(|| config.grades_input_path());
            let output = output.unwrap_or_else(|| config.grades_output_path());
            commands::run_grades(&input, &output, &mut out)
        }
    };

    match result.and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: cannot write output: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_config(cli: &Cli) -> Result<AppConfig, String> {
    let log_dir = match &cli.log_dir {
        Some(dir) if dir.is_relative() => {
            let cwd = std::env::current_dir()
                .map_err(|err| format!("cannot resolve working directory: {err}"))?;
            Some(cwd.join(dir))
        }
        other => other.clone(),
    };

    let config = AppConfig {
        data_dir: cli.data_dir.clone(),
        log_dir,
        log_level: cli.log_level,
    };
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

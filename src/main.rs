mod add;
mod backup;
mod cli;
mod config;
mod context;
mod db;
mod error;
mod list;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use config::AppConfig;
use context::AppContext;
use db::Db;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    let config = {
        let file_path = args.config.clone().or_else(|| {
            std::env::var("VISATRACK_CONFIG_FILE")
                .ok()
                .map(PathBuf::from)
        });

        match file_path {
            Some(path) => AppConfig::try_read(&path)?,
            None => AppConfig::default(),
        }
    };

    let mut ctx = {
        let db = Db::open(&config.db_file_path.0)
            .with_context(|| format!("Opening appointment store {}", config.db_file_path.0))?;
        AppContext { config, db }
    };
    log::debug!("using appointment store {}", ctx.config.db_file_path.0);

    match args.command {
        cli::Command::Add {
            applicant_name,
            reference_number,
            embassy_or_city,
            apply_date,
            received_date,
            interview_date,
            notes,
        } => {
            add::add_record(
                &mut ctx,
                add::AddFields {
                    applicant_name,
                    reference_number,
                    embassy_or_city,
                    apply_date,
                    received_date,
                    interview_date,
                    notes,
                },
            )?;
        }
        cli::Command::List {
            search,
            with_interview,
        } => {
            list::print_records(
                &mut ctx,
                list::ListFilter {
                    search,
                    with_interview,
                },
            )?;
        }
        cli::Command::Export { output } => {
            let bytes = backup::export_csv(&mut ctx.db)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("Writing CSV backup to {}", path.display()))?;
                    println!("Wrote CSV backup to {}", path.display());
                }
                None => {
                    std::io::stdout()
                        .write_all(&bytes)
                        .context("Writing CSV backup to stdout")?;
                }
            }
        }
        cli::Command::Restore { file_path } => {
            let bytes = std::fs::read(&file_path)
                .with_context(|| format!("Reading CSV backup {}", file_path.display()))?;
            let count = backup::restore_from_csv(&mut ctx.db, &bytes)?;
            println!("Restored {count} records from {}", file_path.display());
        }
    };

    Ok(())
}

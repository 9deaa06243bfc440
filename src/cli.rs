use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Optionally specify the path to the config file to use.
    /// If not set, then the `VISATRACK_CONFIG_FILE` environment variable is
    /// tried; if that is unset too, every setting falls back to its default.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a new appointment. Every field is optional.
    Add {
        #[arg(long, value_name = "NAME")]
        applicant_name: Option<String>,

        #[arg(long, value_name = "REF")]
        reference_number: Option<String>,

        /// For example "Germany - Islamabad".
        #[arg(long, value_name = "PLACE")]
        embassy_or_city: Option<String>,

        /// Date the application was handed in, YYYY-MM-DD.
        #[arg(long, value_name = "DATE")]
        apply_date: Option<String>,

        /// Date the appointment notice arrived, YYYY-MM-DD.
        #[arg(long, value_name = "DATE")]
        received_date: Option<String>,

        /// Scheduled interview date, YYYY-MM-DD.
        #[arg(long, value_name = "DATE")]
        interview_date: Option<String>,

        #[arg(long, value_name = "TEXT")]
        notes: Option<String>,
    },

    /// Show all recorded appointments, latest interview date first.
    List {
        /// Only show records whose name, reference, embassy or notes contain
        /// this text.
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,

        /// Only show records that have an interview date.
        #[arg(long)]
        with_interview: bool,
    },

    /// Write a CSV backup of all records.
    Export {
        /// File to write the backup to; stdout if not set.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Load records from a CSV backup, assigning fresh ids.
    Restore { file_path: PathBuf },
}

// src/cli.rs
//
// Headless access to the same sample dataset the GUI shows.
// `cli list --filter crocetta --sort price` etc.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tabled::{Table, Tabled, settings::Style};

use crate::{
    config::options::{ExportFormat, ExportOptions},
    data::{ListingTable, SortKey},
    core::{format_date, format_price},
    file,
    render::{DashboardView, MountPoint, Mounts},
    store::{Dataset, Listing},
};

#[derive(Parser, Debug)]
#[command(name = "cli", author, version, about = "Turin rental monitor (headless)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// All tracked listings, filtered and sorted like the History table
    List {
        /// Case-insensitive substring over the visible columns
        #[arg(short, long, default_value = "")]
        filter: String,

        /// price | location | date (unknown keys fall back to date)
        #[arg(short, long, default_value = "date")]
        sort: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Most recent listings from the dashboard
    Recent,

    /// Monitoring status, statistics and system log
    Stats,

    /// Default monitor configuration
    Config {
        #[arg(long)]
        json: bool,
    },

    /// Write the history listings to a delimited file
    Export {
        /// Output path; the extension follows --format
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Property")]
    title: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Date Added")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
}

impl From<&Listing> for Row {
    fn from(l: &Listing) -> Self {
        Self {
            title: l.title.clone(),
            price: format_price(l.price),
            location: l.location.clone(),
            date: format_date(&l.added_at),
            source: s!(l.source_name()),
        }
    }
}

fn print_table(rows: Vec<Row>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ds = Dataset::sample();
    logd!("CLI: {:?}", cli.command);

    match cli.command {
        Command::List { filter, sort, json } => {
            let mut table = ListingTable::new(&ds.history_listings);
            table.sort(SortKey::from_name(&sort));
            table.filter(&filter);

            if json {
                let visible: Vec<&Listing> = table.visible().collect();
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print_table(table.visible().map(Row::from).collect());
                println!("{} of {} listings", table.visible_count(), table.len());
            }
        }

        Command::Recent => print_table(ds.recent_listings.iter().map(Row::from).collect()),

        Command::Stats => {
            let mounts = Mounts::only(&[
                MountPoint::MonitoringStatus,
                MountPoint::Statistics,
                MountPoint::SystemLogs,
            ]);
            let view = DashboardView::render(&ds, &ds.default_config(), &mounts);

            if let Some(st) = &view.status {
                println!("{} (last scan {}, next scan {})", st.text, st.last_scan, st.next_scan);
            }
            for card in view.stats.iter().flatten() {
                println!("{:<16}{}", card.label, card.value);
            }
            println!();
            for line in view.logs.iter().flatten() {
                println!("{} - {}", line.time, line.message);
            }
        }

        Command::Config { json } => {
            let config = ds.default_config();
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("{config:#?}");
            }
        }

        Command::Export { out, format, stdout } => {
            let mut export = ExportOptions::default();
            export.format = format.into();
            if let Some(p) = &out {
                export.set_path(&p.to_string_lossy());
            }

            if stdout {
                println!("{}", file::export_text(&ds, &export));
            } else {
                let path = file::write_export(&ds, &export)
                    .wrap_err("Failed to write export")?;
                logf!("Export: OK → {}", path.display());
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

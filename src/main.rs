use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use travels::cli::Session;
use travels::config::TravelPaths;
use travels::display::{format_menu, format_notice};
use travels::storage::Storage;

#[derive(Parser)]
#[command(
    name = "travels",
    author = "Kaylee Beyene",
    version,
    about = "Interactive manager for travel records",
    long_about = "Reads commands from standard input (print, add, del, edit, sort, \
                  find, avg, exit) and keeps the travel records in a semicolon \
                  delimited file that is rewritten after every change."
)]
struct Cli {
    /// Data file (defaults to $TRAVELS_DB_FILE, then db.csv)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print the command menu before reading commands
    #[arg(short, long)]
    menu: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.file {
        Some(file) => TravelPaths::with_file(file)?,
        None => TravelPaths::new(),
    };
    info!("Using data file {}", paths.data_file().display());

    let (storage, notices) = Storage::open(paths);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for notice in &notices {
        writeln!(out, "{}", format_notice(notice))?;
    }
    if cli.menu {
        writeln!(out, "{}", format_menu())?;
    }

    let mut session = Session::new(storage);
    session
        .run(io::stdin().lock(), &mut out)
        .context("Failed to read commands")?;

    out.flush()?;
    Ok(())
}

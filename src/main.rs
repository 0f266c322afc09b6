//! iso-reader
//!
//! One-shot command line access to ISO 9660 images: volume information,
//! directory listings and file extraction.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use iso_reader::config::get_config;
use iso_reader::disc::{format_size, listing_columns, FileSystem, FsError};

#[derive(Debug, Parser)]
#[clap(name = "iso-reader", version, about = "Read files from ISO 9660 disc images")]
struct Cli {
    /// Path to the disc image
    image: PathBuf,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the primary volume descriptor
    Info,
    /// List a directory ("folder/sub", root when omitted)
    Ls { path: Option<String> },
    /// Print a file as text
    Cat { path: String },
    /// Extract a file into the current directory
    Get { path: String },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("iso-reader: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), FsError> {
    let config = get_config();
    let mut fs = FileSystem::open_with(&cli.image, config.filesystem.clone())?;

    match cli.command.unwrap_or(Command::Info) {
        Command::Info => print_info(&fs),
        Command::Ls { path } => {
            let path = path.unwrap_or_default();
            let mut total = 0u64;

            for record in fs.list(&path)? {
                if record.is_dot_entry() && !config.listing.show_dot_entries {
                    continue;
                }
                total += record.extent_size as u64;
                let [size, date, time, name] = listing_columns(&record);
                println!("{:>5}  {:>11}  {}  {}", size, date, time, name);
            }

            println!("total {}", format_size(total));
        }
        Command::Cat { path } => {
            let file = fs.read_file(&path)?;
            println!("{}", file.as_text());
        }
        Command::Get { path } => {
            let file = fs.read_file(&path)?;
            let written = file.save_in(&std::env::current_dir()?)?;
            println!("{} ({}) -> {}", file.name, format_size(file.size as u64), written.display());
        }
    }

    fs.close();
    Ok(())
}

fn print_info(fs: &FileSystem) {
    let pvd = fs.descriptor();
    println!("Volume identifier:  {}", pvd.volume_identifier);
    println!("System identifier:  {}", pvd.system_identifier);
    println!("Volume set:         {}", pvd.volume_set_identifier);
    println!("Publisher:          {}", pvd.publisher);
    println!("Data preparer:      {}", pvd.data_preparer);
    println!("Application:        {}", pvd.application_identifier);
    println!("Created:            {}", pvd.creation_date);
    println!(
        "Volume size:        {} blocks of {} bytes",
        pvd.volume_size, pvd.logical_block_size
    );
    println!("Root directory:     sector {}", pvd.root_dir_location);
}

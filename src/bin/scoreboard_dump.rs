use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scoreboard_tools::{
    commands::{dump::dump_scoreboards, show::show_file, version::show_data_version},
    scoreboard::ParserRegistry,
    VERBOSE,
};

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract matched scoreboard files as JSON into a folder
    Dump {
        /// Path to the folder to write the extracted JSON to
        output_folder: PathBuf,
        /// Glob patterns selecting the scoreboard files
        #[clap(default_value = "*.dat")]
        #[arg(num_args = 1..)]
        globs: Vec<String>,
    },
    /// Extract a single scoreboard file to stdout
    Show {
        /// Path to the scoreboard file
        path: PathBuf,
    },
    /// Print the schema version of a scoreboard file
    DataVersion {
        /// Path to the scoreboard file
        path: PathBuf,
    },
}

/// A CLI tool that extracts objectives and player scores from Minecraft
/// scoreboard.dat files as JSON.
#[derive(Parser, Debug)]
#[command(name = "scoreboard_dump")]
#[clap(version)]
struct Cli {
    /// Print extra diagnostics, including parser selection and swallowed
    /// field errors
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    VERBOSE.set(cli.verbose).unwrap();

    let registry = ParserRegistry::with_builtin_parsers();

    match cli.command {
        Command::Dump {
            output_folder,
            globs,
        } => dump_scoreboards(&registry, &globs, &output_folder).context("Dump command failed")?,
        Command::Show { path } => show_file(&registry, &path).context("Show command failed")?,
        Command::DataVersion { path } => {
            show_data_version(&path).context("DataVersion command failed")?
        }
    }

    Ok(())
}

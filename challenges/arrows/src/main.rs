use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::PathBuf;
use std::process::ExitCode;

use arrows::{Coordinate, Result, Scanner, Traveler, Writer, board, scored_paths, testing};
use clap::{Args, Parser, Subcommand};
use log::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arrows")]
#[command(about = "Longest walks across a board of arrows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BoardArgs {
    /// Board file, one row per line. Reads stdin when omitted.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Use the built-in reference board
    #[arg(long, conflicts_with = "file")]
    sample: bool,

    /// Fail any walk that takes more than this many moves
    #[arg(long)]
    max_steps: Option<usize>,
}

impl BoardArgs {
    fn scanner(&self) -> Result<Scanner> {
        Ok(match (&self.file, self.sample) {
            (_, true) => Scanner::new(Cursor::new(board::SAMPLE)),
            (Some(path), false) => Scanner::new(BufReader::new(File::open(path)?)),
            (None, false) => Scanner::new(std::io::stdin().lock()),
        })
    }

    fn traveler(&self) -> Traveler {
        Traveler {
            max_steps: self.max_steps,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the start of the walk that covers the most cells
    Best {
        #[command(flatten)]
        board: BoardArgs,

        /// Also print the walk and its weight
        #[arg(long)]
        path: bool,
    },
    /// Walk from a single start cell
    Travel {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long)]
        row: i64,

        #[arg(long)]
        column: i64,
    },
    /// Print the weight of the walk from every cell
    Report {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Run the stored board cases
    Verify {
        #[arg(long, default_value = "data")]
        data: PathBuf,
    },
}

fn run(command: Commands, out: &mut Writer) -> Result<ExitCode> {
    match command {
        Commands::Best { board, path } => {
            let grid = board.scanner()?.read_board()?;
            let best = board.traveler().find_best_path(&grid)?;
            out.println(best.start());
            if path {
                out.println(&best);
                out.println(format!("weight {}", best.weight()));
            }
        }
        Commands::Travel { board, row, column } => {
            let grid = board.scanner()?.read_board()?;
            let path = board
                .traveler()
                .travel(&grid, Coordinate::new(row, column))?;
            out.println(&path);
            out.println(format!("weight {}", path.weight()));
        }
        Commands::Report { board } => {
            let grid = board.scanner()?.read_board()?;
            for scored in scored_paths(&grid, &board.traveler())? {
                out.println(format!(
                    "{} weight {} length {}",
                    scored.path.start(),
                    scored.weight,
                    scored.path.len()
                ));
            }
        }
        Commands::Verify { data } => {
            if testing::run_all_cases(&data, "boards", arrows::solve) > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // logs go to stderr so stdout carries only results; filtered by RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = Writer::new();

    match run(cli.command, &mut out) {
        Ok(code) => {
            print!("{}", out.into_string());
            code
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;
use std::process::exit;
use aspa_wizard_lib::{check_and_output, generate_bird, GenerationConfig};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::Level;

/// Generate a BIRD2 `is_aspa_valid` function from an ASPA JSON export
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Show warnings
    #[clap(short, long)]
    verbose: bool,

    /// The input file generated by `routinator` (required)
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// The file to output the BIRD2 function to, stdout if omitted
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Consider paths without ASPA invalid (NOT RECOMMENDED)
    #[clap(short, long)]
    strict: bool,

    /// Print debug information to stderr
    #[clap(long)]
    debug: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", err.render());
                exit(0)
            }
            _ => {
                print!("{}", err.render());
                exit(1)
            }
        },
    };

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.input.is_none() {
        println!("(error) `--input` flag not specified.");
    }
    if cli.output.is_none() && cli.verbose {
        println!("(warn) `--output` flag not specified.");
    }
    let Some(input) = cli.input else {
        exit(1)
    };

    let config = GenerationConfig { strict: cli.strict };
    let code = check_and_output(generate_bird(&input, &config), cli.output.as_deref(), cli.verbose);
    exit(code)
}

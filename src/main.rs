use clap::Parser;

use stegbmp::{
    cli::{Cli, Commands},
    handler::{handle_decode, handle_encode},
};

/// Parses the command line and dispatches to the matching handler.
/// Every failure surfaces as a diagnostic and a generic non-zero exit.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
    }
}

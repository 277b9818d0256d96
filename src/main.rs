use clap::Parser;
use miette::Result;
use packtex::cli::{Cli, Commands};
use packtex::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Recolour(args) => packtex::cli::recolour::run(args, &printer)?,
        Commands::Ore(args) => packtex::cli::ore::run(args, &printer)?,
        Commands::Completions(args) => packtex::cli::completions::run(args)?,
    }

    Ok(())
}

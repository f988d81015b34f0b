use clap::Parser;
use miette::Result;
use tscproc::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    tscproc::cli::run(args)?;
    Ok(())
}

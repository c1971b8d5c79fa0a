// src/bin/cli.rs
use candidate_dash::{cli, log};
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let args = cli::parse_args(std::env::args().skip(1))?;
    let stdout = std::io::stdout();
    cli::run(args, &mut stdout.lock())?;
    Ok(())
}

// src/bin/cli.rs
use urfu_schedule::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}

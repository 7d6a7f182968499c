use clap::Parser;
use zindex_fix::config::{Cli, Config};
use zindex_fix::error::FixError;
use zindex_fix::fix;

fn main() -> Result<(), FixError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::from(Cli::parse());
    let report = fix::run(&config)?;

    for line in fix::summary_lines(&config, &report) {
        println!("{line}");
    }
    Ok(())
}

use brkit::FormatSettings;
use brkit_cli::args::Cli;
use brkit_cli::commands;
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => FormatSettings::load(path)?,
        None => FormatSettings::default(),
    };
    info!(locale = %settings.locale, currency = %settings.currency_code, "Settings ready");

    let output = commands::run(&cli.command, &settings)?;
    println!("{output}");
    Ok(())
}

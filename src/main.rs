use clap::Parser;
use recursion_poem::utils::{logger, validation::Validate};
use recursion_poem::{write_poem, CliConfig, PoemConfig, PoemError};

fn main() -> anyhow::Result<()> {
    let _cli = CliConfig::parse();

    logger::init_cli_logger();
    tracing::debug!("Starting recursion-poem");

    let config = PoemConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        return Err(report(e));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_poem(&mut out, config.depth).map_err(report)?;

    Ok(())
}

fn report(e: PoemError) -> anyhow::Error {
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    e.into()
}

use clap::Parser;
use raillcc::{Cli, Scenario, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let scenario = Scenario::load(cli.command.scenario_path())?;
    let report = cli.command.execute(&scenario)?;
    print!("{report}");

    tracing::debug!("Done");
    Ok(())
}

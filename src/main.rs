use clap::Parser;
use vpn_probe::cli::commands::{cmd_candidates, cmd_interfaces, cmd_probe};
use vpn_probe::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Probe { out, trace } => {
            cmd_probe(
                &config,
                cli.serial.as_deref(),
                out.as_deref(),
                trace.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Candidates => {
            cmd_candidates(&config, cli.serial.as_deref(), cli.verbose)?;
        }
        Commands::Interfaces => {
            cmd_interfaces(&config, cli.serial.as_deref())?;
        }
    }

    Ok(())
}

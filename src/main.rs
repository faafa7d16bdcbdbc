#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use review_agent::cli::{router, Cli, Commands};
use review_agent::commands;
use review_agent::config::Config;
use review_agent::error::ReviewAgentError;

fn main() -> Result<()> {
    // Route arguments to default to the review command when appropriate
    let args = std::env::args_os();
    let routed_args = router::route_args(args);
    let cli = Cli::parse_from(routed_args);

    let config = Config::load()?.with_verbose(cli.verbose);

    let result = match &cli.command {
        Some(Commands::Review(cmd)) => commands::review::execute(&config, cmd),
        Some(Commands::Agent(cmd)) => commands::agent::execute(&config, cmd),
        Some(Commands::Build(cmd)) => commands::build::execute(&config, cmd),
        Some(Commands::Clean { yes }) => commands::clean::execute(&config, *yes),
        Some(Commands::Check) => commands::check::execute(&config),
        Some(Commands::Config { command }) => commands::config::execute(command),
        None => {
            // Router should always insert a subcommand; this is a safety net
            eprintln!(
                "Internal error: no command after routing. Run 'review-agent --help' for usage."
            );
            std::process::exit(1);
        }
    };

    // A failed container run carries the in-container agent's own exit status
    if let Err(ReviewAgentError::CommandExitCode(code)) = &result {
        std::process::exit(*code);
    }

    result?;
    Ok(())
}

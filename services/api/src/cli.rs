use crate::report::{run_controls, run_update, ControlsArgs, UpdateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skill_gap::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Skill Gap Dashboard",
    about = "Serve or query the youth education and skill gap dashboard",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP dashboard (default command)
    Serve(ServeArgs),
    /// Run one dashboard update and print the charts and messages
    Update(UpdateArgs),
    /// List the education fields and skills offered by the dropdowns
    Controls(ControlsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// CSV demand table to serve instead of the built-in sample
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Update(args) => run_update(args),
        Command::Controls(args) => run_controls(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["skill-gap-dashboard"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn update_requires_field_and_skill() {
        assert!(Cli::try_parse_from(["skill-gap-dashboard", "update", "--field", "X"]).is_err());

        let cli = Cli::try_parse_from([
            "skill-gap-dashboard",
            "update",
            "--field",
            "Engineering",
            "--skill",
            "Matlab",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Update(args)) => assert_eq!(args.threshold, 50),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn threshold_flag_is_range_checked() {
        let parsed = Cli::try_parse_from([
            "skill-gap-dashboard",
            "update",
            "--field",
            "Engineering",
            "--skill",
            "Matlab",
            "--threshold",
            "101",
        ]);
        assert!(parsed.is_err());
    }
}

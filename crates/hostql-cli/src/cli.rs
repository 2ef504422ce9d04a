use crate::Outcome;
use crate::commands::CheckCmd;
use crate::commands::RunCommand;
use clap::CommandFactory;

#[derive(clap::Parser, Debug)]
#[command(name = "hostql", version, about = "Checks hostql query documents.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(
        help="Log at debug level regardless of `LOG_LEVEL`.",
        long,
        short='v',
    )]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Parse and validate query documents on disk.
    Check(Box<CheckCmd>),
}

impl Cli {
    pub(crate) async fn run(self) -> Outcome {
        match self.command {
            Some(Command::Check(cmd)) => cmd.run().await,
            None => Outcome::output(Self::command().render_help().to_string()),
        }
    }
}

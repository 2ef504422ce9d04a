mod cli;
mod commands;
mod logging;
mod outcome;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use outcome::Outcome;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run().await.report()
}

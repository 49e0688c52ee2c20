use clap::Parser;

mod app;
mod commands;
mod logging;

use commands::{cli, repl};
use replicant_core::api::CliError;
use replicant_core::config;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let args = cli::Args::parse();

    let mut cfg = config::load(args.config.as_deref())?;
    args.apply_to(&mut cfg);

    let _log_guard = logging::init(&cfg.logging, args.debug)?;

    let mut app = app::App::new(&cfg)?;
    if !args.commands.is_empty() {
        let (stdout, stderr) = (std::io::stdout(), std::io::stderr());
        return repl::run_lines(&mut app, &args.commands, &mut stdout.lock(), &mut stderr.lock());
    }

    repl::run(&mut app).await
}

mod cli;
mod commands;
mod context;
mod logging;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;
use tracing::error;

fn main() {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.clone().unwrap_or(Commands::Report { json: false });
    let result = Context::new(&cli.settings()).and_then(|ctx| match command {
        Commands::Report { json } => commands::report::run(&ctx, json),
        Commands::List { json } => commands::list::run(&ctx, json),
        Commands::Count { url } => commands::count::run(&ctx, &url),
    });

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

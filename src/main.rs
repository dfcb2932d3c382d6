//! CLI entry point for vimshell.

mod app;
mod cli;

use clap::Parser;
use tracing::debug;
use vimshell::config::load_config_with_source;

fn main() {
    let args = cli::Args::parse();

    // Load config.
    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;

    // Apply CLI overrides.
    app::apply_cli_overrides(&mut config, &args);

    match app::logging::init(&config.logging) {
        Ok(true) => debug!(source = ?loaded.source, "configuration loaded"),
        Ok(false) => {}
        Err(e) => eprintln!("warning: logging disabled: {e}"),
    }

    if let Err(e) = app::run(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

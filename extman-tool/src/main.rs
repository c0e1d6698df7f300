//! extman-tool: a tool for generating and patching browser extension manifests

use extman_tool::cli;
use log::error;
use structopt::StructOpt;

fn main() {
    let mut env_log_builder = env_logger::Builder::new();
    env_log_builder.filter_level(log::LevelFilter::Info);
    env_log_builder.format_timestamp(None);
    env_log_builder.format_module_path(false);

    // Allows to still set configuration via the default environment variable
    env_log_builder.parse_default_env();
    env_log_builder.init();

    let matches = cli::ExtmanToolApp::from_args();

    if let Err(e) = matches.subcommand.run() {
        error!("Command failed: {} ({:?})", e, e);
        std::process::exit(1);
    }

    std::process::exit(0);
}

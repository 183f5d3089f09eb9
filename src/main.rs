use chatscore::config::Config;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; flags given on the command line take precedence
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the dated scoreboards found in a chat export
    Extract(cmd::extract::ExtractArgs),
    /// Build the cleaned score series and render it
    Track(cmd::track::TrackArgs),
}

fn resolve_config(path: Option<&str>, cli_config: &Config, sub_matches: &ArgMatches) -> Config {
    let Some(path) = path else {
        return cli_config.clone();
    };

    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        error!("❌ Failed to load config '{}': {}", path, e);
        process::exit(1);
    });
    config.merge_from_cli(cli_config, sub_matches);
    config
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Extract(args) => (&args.config, "extract"),
        Commands::Track(args) => (&args.config, "track"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        error!("❌ Missing arguments for '{}'", sub_name);
        process::exit(1);
    };

    let config = resolve_config(cli.config_file.as_deref(), cli_config, sub_matches);
    if let Err(e) = config.extraction.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let result = match &cli.command {
        Commands::Extract(args) => cmd::extract::run(args, &config),
        Commands::Track(args) => cmd::track::run(args, &config),
    };

    if let Err(e) = result {
        error!("\n❌ FATAL: {}", e);
        process::exit(1);
    }
}

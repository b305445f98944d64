mod cmds;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shufl")]
#[command(version = "0.1.4")]
#[command(about = "Shuffle dasherized sequences and verify their uniformity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[clap(name = "shuffle")]
    Shuffle(cmds::shuffle::Opts),

    #[clap(name = "validate")]
    Validate(cmds::validate::Opts),

    #[clap(name = "request")]
    Request(cmds::request::Opts),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Shuffle(opts) => cmds::shuffle::run(opts).await?,
        Commands::Validate(opts) => cmds::validate::run(opts).await?,
        Commands::Request(opts) => cmds::request::run(opts).await?,
    }

    Ok(())
}

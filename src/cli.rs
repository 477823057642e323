use clap::{ArgAction, Parser};

use crate::constants::{CONFIG_PATH, PROFILES_PATH};

#[derive(Parser)]
#[command(
    name = "matchai",
    about = "Score networking compatibility between event participants",
    long_about = "Scores a participant against the other participants of an event and prints the \
                  qualifying matches as JSON. Uses Google AI when an API key is configured and a \
                  deterministic heuristic otherwise. Use --insights for single-profile advice, or \
                  --server to expose the same operations over gRPC.",
    version
)]
pub struct Args {
    /// Configuration file
    #[arg(long, help = "Path to the YAML configuration file", default_value = CONFIG_PATH)]
    pub config: String,

    /// Profile directory
    #[arg(
        short,
        long,
        help = "Path to the JSON file holding profiles and event participants",
        default_value = PROFILES_PATH
    )]
    pub profiles: String,

    /// User to analyse
    #[arg(
        short,
        long,
        help = "Id of the participant to match or analyse",
        required_unless_present = "server"
    )]
    pub user: Option<String>,

    /// Event to match within
    #[arg(
        short,
        long,
        help = "Id of the event whose participants are candidates",
        required_unless_present_any = ["insights", "server"]
    )]
    pub event: Option<String>,

    /// Single-profile analysis
    #[arg(
        long,
        help = "Print summary, enhanced summary and networking insights for --user",
        conflicts_with = "event",
        action = ArgAction::SetTrue
    )]
    pub insights: bool,

    #[arg(long, help = "Enable debug logging", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Publish generated matches to Iggy
    #[arg(
        long,
        help = "Publish match records to the configured Iggy stream (requires the `messaging` feature)",
        action = ArgAction::SetTrue
    )]
    pub publish: bool,

    /// Run in server mode
    #[arg(
        long,
        help = "Run as a gRPC server (requires the `grpc` feature)",
        conflicts_with_all = ["user", "event", "insights"],
        action = ArgAction::SetTrue
    )]
    pub server: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

use clap::Parser;
use quizline::DataSource;
use quizline::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "quizline", about = "Terminal trivia quiz")]
struct Args {
    /// Where questions come from
    #[arg(short, long, value_enum)]
    source: Option<DataSource>,

    /// Time allowed for the whole quiz, in seconds
    #[arg(short, long, value_name = "SECONDS")]
    time: Option<u64>,

    /// Skip the simulated loading delays between screens
    #[arg(long)]
    no_delay: bool,

    /// Start a quiz right away instead of showing the landing screen
    #[arg(long)]
    auto_start: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quizline.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("quizline.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::QuizlineConfig::default()
    });
    let cli = CliOverrides {
        source: args.source,
        countdown_seconds: args.time,
        no_delay: args.no_delay,
        auto_start: args.auto_start,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Quizline starting up with source: {}, countdown: {}",
        resolved.source.label(),
        resolved.countdown
    );

    quizline::tui::run(resolved)
}

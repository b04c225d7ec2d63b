use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use marquee::core::config;
use marquee::tui;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal search for a movie discovery site")]
struct Args {
    /// Base URL of the movie site (overrides config file and MARQUEE_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the TUI owns the terminal, so logs go to
    // marquee.log in the current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Marquee starting up against {}", resolved.base_url);

    tui::run(resolved)
}

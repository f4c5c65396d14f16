use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use hoba_navigator::core::config::{self, OverviewMode};
use hoba_navigator::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "hoba-navigator",
    about = "Terminal navigator for the HOBA business-architecture playbook"
)]
struct Args {
    /// Overview presentation: generated diagram or external image reference
    #[arg(short, long, value_enum)]
    overview: Option<OverviewMode>,

    /// Path to the roadmap image used by the image overview
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger — the terminal itself belongs to the TUI.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("hoba-navigator.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        args.overview,
        args.image.as_deref().and_then(|p| p.to_str()),
    );
    log::info!("HOBA Navigator starting up: {:?}", resolved);

    tui::run(resolved)
}

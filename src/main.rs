use anyhow::Result;
use clap::Parser;
use snake_tui::game::{config::MIN_TILE_COUNT, GameConfig};
use snake_tui::modes::PlayMode;
use snake_tui::score::{HighScoreStore, DEFAULT_STORE_FILE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Cells per board side
    #[arg(
        long,
        default_value = "20",
        value_parser = clap::value_parser!(u64).range(MIN_TILE_COUNT as u64..)
    )]
    tile_count: u64,

    /// Where the high score is stored
    #[arg(long, default_value = DEFAULT_STORE_FILE)]
    high_score_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.tile_count as usize);
    let store = HighScoreStore::new(cli.high_score_file);

    let mut play_mode = PlayMode::new(config, store);
    play_mode.run().await?;

    Ok(())
}

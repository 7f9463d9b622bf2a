use anyhow::Context;
use clap::{ArgAction, Parser};
use findaway::config::Config;
use findaway::input::{PieceType, Session};
use findaway::script::{self, Script};
use findaway::ui::TextRenderer;
use std::io::{self, Write};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FINDAWAY_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "findaway")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Grid editor and run controller for path-planning visualizations"
)]
struct Cli {
    /// Replay a TOML event script against a fresh session
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Read configuration from FILE instead of ~/.config/findaway/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial movement piece (overrides config)
    #[arg(long, short = 'p', value_enum, value_name = "PIECE")]
    piece: Option<PieceType>,

    /// Start with animated solving (overrides config)
    #[arg(long, short = 'a', action = ArgAction::SetTrue)]
    animate: bool,

    /// Print every rendered frame instead of only the final one
    #[arg(long, action = ArgAction::SetTrue)]
    frames: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(piece) = cli.piece {
        config.session.default_piece = piece;
    }
    if cli.animate {
        config.session.animate = true;
    }

    let Some(script_path) = cli.script else {
        print_usage(&config);
        return Ok(());
    };

    let steps = Script::load(&script_path)?
        .resolve()
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let mut session = Session::from_config(&config).map_err(|err| anyhow::anyhow!(err))?;
    let mut renderer = TextRenderer::new(io::stdout().lock());

    log::info!(
        "Replaying {} steps from {}",
        steps.len(),
        script_path.display()
    );
    let frames = script::play(&mut session, &steps, &mut renderer, cli.frames);
    renderer.into_inner().flush()?;

    log::info!(
        "Finished after {} frames in {} mode",
        frames,
        session.mode().name()
    );

    Ok(())
}

fn print_usage(config: &Config) {
    println!("findaway: Grid editor and run controller for path-planning visualizations");
    println!();
    println!("Usage:");
    println!("  findaway --script events.toml          Replay an event script, print the final frame");
    println!("  findaway --script events.toml --frames Print every frame");
    println!("  findaway --help                        Show help");
    println!();
    println!("Workflow:");
    println!("  1. Click a cell to place the start, then another for the goal");
    println!("  2. Drag with the left button to draw walls, right button to erase");
    println!("  3. Run the search, then restart or reset");
    println!();
    println!("Keybindings:");
    for line in config.keybindings.describe() {
        println!("  {line}");
    }
}

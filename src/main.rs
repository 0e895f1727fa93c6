mod console;
mod game;

use std::io;

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use console::Terminal;
use game::catalog::{self, Catalog};
use game::GameConfig;

fn main() -> Result<()> {
    // Initialize logging. Control verbosity with RUST_LOG env var:
    //   RUST_LOG=info   poi-directive   # attempts, transitions, seed
    //   RUST_LOG=debug  poi-directive   # + shuffled options and every evaluation
    //   RUST_LOG=trace  poi-directive   # + catalog validation
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", game::USAGE);
        return Ok(());
    }

    let config = GameConfig::from_args(&args).context(game::USAGE)?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => catalog::person_of_interest().context("built-in catalog is invalid")?,
    };
    info!("Catalog ready with {} tracks", catalog.len());

    let seed = config.seed.unwrap_or_else(rand::random);
    info!("Shuffle seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout(), config.pace);
    let report = game::run(&mut terminal, &catalog, &mut rng)?;

    info!(
        "{} completed {}/{} missions as {} after {} attempt(s)",
        report.player_name, report.completed, report.total, report.character, report.attempts
    );
    Ok(())
}

//! Simulate one game of President and print the finishing order.
//!
//! ```text
//! president --players 5 --seed 42 --policy random --verbose
//! ```

use clap::{Parser, ValueEnum};
use rust_president::{
    DecisionPolicy, FirstAvailable, GameConfig, GameEngine, LogObserver, LowestFirst, PlayerId,
    UniformRandom,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    /// Always take the first offered action
    First,
    /// Uniformly random among offered actions
    Random,
    /// Shed the lowest cards first
    Lowest,
}

#[derive(Debug, Parser)]
#[command(name = "president", about = "Simulate a game of President")]
struct Args {
    /// Number of players
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Seed for the shuffle and the random policy
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Seat that leads first
    #[arg(long, default_value_t = 0)]
    first: u8,

    #[arg(long, value_enum, default_value_t = PolicyKind::First)]
    policy: PolicyKind,

    /// Log every engine transition
    #[arg(short, long)]
    verbose: bool,
}

fn log(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;

    let config = GameConfig::new(args.players)
        .with_seed(args.seed)
        .with_first_player(PlayerId::new(args.first));

    let policy: Box<dyn DecisionPolicy> = match args.policy {
        PolicyKind::First => Box::new(FirstAvailable),
        PolicyKind::Random => Box::new(UniformRandom::from_seed(args.seed)),
        PolicyKind::Lowest => Box::new(LowestFirst),
    };

    let mut engine = GameEngine::new(&config, policy, LogObserver)?;
    let standings = engine.run()?;

    for (place, player) in standings.finish_order.iter().enumerate() {
        println!("{}. {}", place + 1, player);
    }
    Ok(())
}

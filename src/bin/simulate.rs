//! Play memory games between automated agents and report the results.
//!
//! `RUST_LOG=debug cargo run --features cli --bin simulate -- --players 3 --cards 20`
//! logs every turn.

use clap::Parser;
use memory_match::{GameBuilder, GameConfig, GameResult, Result};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cards on the board (even, at least 4).
    #[arg(short, long, default_value_t = 16)]
    cards: usize,

    /// Number of agents (2-4). Random when omitted.
    #[arg(short, long)]
    players: Option<usize>,

    /// Seed of the first game; later games use consecutive seeds.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play.
    #[arg(short, long, default_value_t = 1)]
    games: u64,

    /// Stop a game after this many turns.
    #[arg(long, default_value_t = 10_000)]
    max_turns: u32,

    /// Print the final game snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    for game_idx in 0..args.games {
        let seed = game_seed(args.seed, game_idx);
        let mut config = GameConfig::default()
            .with_card_count(args.cards)
            .with_seed(seed);
        config.player_count = args.players;

        let mut game = GameBuilder::from_config(config).build_from_config()?;
        let turns = game.play_to_end(args.max_turns)?;

        println!("Game {} (seed {}): {} turns, {} rounds", game_idx, seed, turns, game.round());
        for player in game.players() {
            println!("  {} ({}): {} points", player.name, player.color, player.points);
        }
        match game.result() {
            Some(GameResult::Winner(winner)) => println!("  Winner: {}", winner),
            Some(GameResult::Winners(winners)) => {
                let names: Vec<String> = winners.iter().map(ToString::to_string).collect();
                println!("  Shared win: {}", names.join(", "));
            }
            None => println!("  Stopped after {} turns without finishing", turns),
        }
        print!("{}", game.board_snapshot());

        if args.json {
            match serde_json::to_string_pretty(&game.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(err) => log::error!("could not serialize snapshot: {}", err),
            }
        }
    }
    Ok(())
}

/// Seed of the `game_idx`-th game. Wraps past `u64::MAX`.
fn game_seed(base: u64, game_idx: u64) -> u64 {
    base.wrapping_add(game_idx)
}

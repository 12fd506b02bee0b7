//! Throughput run on the classic board.
//!
//! Measures dice rolls per second for the cached stack and games per
//! second for a three-player game. Set `RUST_LOG=debug` to see cache and
//! board lifecycle messages.

use std::time::Instant;

use ladder_bench::{classic_profile, run_trials};
use ladder_core::Roller;
use ladder_dice::CacheConfig;
use ladder_game::Game;

fn main() {
    env_logger::init();

    let mut profile = classic_profile(2016);
    profile.cache = CacheConfig::new(1 << 20);
    let board = profile.build_board().unwrap();

    println!("=== ladder throughput ===\n");

    let start = Instant::now();
    let mut dice = profile.build_dice().unwrap();
    let rolls = 4 * profile.cache.capacity;
    for _ in 0..rolls {
        std::hint::black_box(dice.roll());
    }
    let elapsed = start.elapsed();
    println!("Time taken = {} ms", elapsed.as_millis());
    println!("Dice rolls = {rolls}");
    println!("DRPS       = {:.0}\n", rolls as f64 / elapsed.as_secs_f64());

    let games = 1 << 18;
    let mut game = Game::new(&board, profile.players).unwrap();
    let start = Instant::now();
    let report = run_trials(&mut game, &mut dice, games);
    let elapsed = start.elapsed();
    println!("Time taken = {} ms", elapsed.as_millis());
    println!("Games      = {games}");
    println!("GPS        = {:.0}", games as f64 / elapsed.as_secs_f64());
    println!("Turns/game = {:.1}", report.mean_turns());
    for (seat, wins) in report.wins.iter().enumerate() {
        println!("  seat {seat}: {wins} wins");
    }

    let stats = dice.stats();
    println!("\nCache swaps = {}, fills = {}", stats.swaps, stats.fills_scheduled);
}

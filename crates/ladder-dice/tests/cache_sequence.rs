//! The roll cache must serve exactly the sequence a single-buffered,
//! sequential fill would produce from the same seeded die.

use ladder_core::{CompoundRoll, Roller};
use ladder_dice::{CacheConfig, Die, Folded, RollCache};

fn reference(seed: u64, n: usize) -> Vec<CompoundRoll> {
    let mut folded = Folded::new(Die::seeded(6, seed).unwrap());
    (0..n).map(|_| folded.roll()).collect()
}

#[test]
fn ten_thousand_rolls_across_swaps() {
    const N: usize = 10_000;
    for capacity in [2usize, 64, 1000, 4096] {
        let expected = reference(2024, N);
        let folded = Folded::new(Die::seeded(6, 2024).unwrap());
        let mut cache = RollCache::new(folded, CacheConfig::new(capacity)).unwrap();
        let actual: Vec<CompoundRoll> = (0..N).map(|_| cache.roll()).collect();
        assert_eq!(actual, expected, "capacity {capacity}");

        let stats = cache.stats();
        let swaps = ((N - 1) / capacity) as u64;
        assert_eq!(stats.swaps, swaps, "capacity {capacity}");
        assert_eq!(stats.fills_scheduled, swaps + 1);
        assert_eq!(stats.served, N as u64);
    }
}

#[test]
fn exact_swap_boundary() {
    const L: usize = 256;
    let folded = Folded::new(Die::seeded(6, 5).unwrap());
    let mut cache = RollCache::new(folded, CacheConfig::new(L)).unwrap();
    for _ in 0..L {
        cache.roll();
    }
    assert_eq!(cache.stats().swaps, 0);
    assert_eq!(cache.stats().fills_scheduled, 1);

    cache.roll();
    assert_eq!(cache.stats().swaps, 1);
    assert_eq!(cache.stats().fills_scheduled, 2);
}

#[test]
fn cache_moves_between_threads() {
    let folded = Folded::new(Die::seeded(6, 8).unwrap());
    let mut cache = RollCache::new(folded, CacheConfig::new(128)).unwrap();
    let head: Vec<CompoundRoll> = (0..100).map(|_| cache.roll()).collect();
    let tail = std::thread::spawn(move || {
        let tail: Vec<CompoundRoll> = (0..900).map(|_| cache.roll()).collect();
        tail
    })
    .join()
    .unwrap();

    let mut all = head;
    all.extend(tail);
    assert_eq!(all, reference(8, 1000));
}

#[test]
fn shutdown_recovers_roller_state() {
    let folded = Folded::new(Die::seeded(6, 31).unwrap());
    let mut cache = RollCache::new(folded, CacheConfig::new(10)).unwrap();
    for _ in 0..25 {
        cache.roll();
    }
    // Buffers 0..10, 10..20, 20..30 and 30..40 have been produced.
    let mut roller = cache.shutdown();
    let expected = reference(31, 41);
    assert_eq!(roller.roll(), expected[40]);
}

mod parallel;

use clap::{ArgAction, Parser, ValueEnum};
use cribsim_core::{HandDealer, SamplingStrategy};
use parallel::{simulate_parallel, SimTotals};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Single-pass selection sampling over the deck
    Selection,
    /// Draw random indices, discarding duplicates
    Rejection,
}

impl From<StrategyArg> for SamplingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Selection => SamplingStrategy::Selection,
            StrategyArg::Rejection => SamplingStrategy::Rejection,
        }
    }
}

#[derive(Parser)]
#[command(name = "cribsim")]
#[command(about = "Card hand dealing and play benchmark", long_about = None)]
struct Args {
    /// Number of hands to simulate
    #[arg(default_value_t = 862_500)]
    hands: u64,

    /// Random seed for simulation (defaults to current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Sampling strategy used to deal hands
    #[arg(long, value_enum, default_value = "selection")]
    strategy: StrategyArg,

    /// Deal hands only, skipping the play simulation
    #[arg(long)]
    deal_only: bool,

    /// Number of worker threads (1 = sequential, 0 = auto-detect)
    #[arg(short = 'j', long, default_value_t = 1)]
    threads: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    // Use provided seed or default to current time (microsecond resolution)
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_micros() as u64
    });

    let strategy = SamplingStrategy::from(args.strategy);
    let play = !args.deal_only;

    log::info!(
        "Simulating {} hands (seed {}, {:?} sampling, {} threads)",
        args.hands,
        seed,
        strategy,
        args.threads
    );

    // Time the full loop, simulation logic included, not per-iteration
    let start = Instant::now();
    let totals = if args.threads == 1 {
        simulate_sequential(seed, args.hands, strategy, play)
    } else {
        simulate_parallel(seed, args.hands, strategy, play, args.threads)
    };
    let elapsed = start.elapsed();

    log::debug!(
        "Totals: {} cards played over {} ticks",
        totals.cards_played,
        totals.ticks
    );

    let elapsed_secs = elapsed.as_secs_f64();
    let ns_per_hand = if totals.hands > 0 {
        elapsed.as_nanos() as f64 / totals.hands as f64
    } else {
        0.0
    };

    println!(
        "Simulated {} hands in {:.3} s for {:.1} ns per hand",
        totals.hands, elapsed_secs, ns_per_hand
    );
}

/// Sequential benchmark loop: one generator seeded once at startup and
/// reused for every draw.
fn simulate_sequential(
    seed: u64,
    hands: u64,
    strategy: SamplingStrategy,
    play: bool,
) -> SimTotals {
    let mut dealer = HandDealer::with_strategy(seed, strategy);
    let mut totals = SimTotals::default();

    for _ in 0..hands {
        let hand = dealer.deal();
        totals.hands += 1;

        if play {
            let record = dealer.split_and_play(hand);
            totals.cards_played += record.cards_played as u64;
            totals.ticks += record.ticks as u64;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_zero_hands() {
        let totals = simulate_sequential(42, 0, SamplingStrategy::Selection, true);

        assert_eq!(totals, SimTotals::default());
    }

    #[test]
    fn test_sequential_ten_hands() {
        let totals = simulate_sequential(42, 10, SamplingStrategy::Selection, true);

        assert_eq!(totals.hands, 10);
        assert_eq!(totals.cards_played, 80);
        // Every 4/4 split plays out in exactly 8 ticks
        assert_eq!(totals.ticks, 80);
    }

    #[test]
    fn test_sequential_deterministic() {
        let totals1 = simulate_sequential(7, 25, SamplingStrategy::Rejection, true);
        let totals2 = simulate_sequential(7, 25, SamplingStrategy::Rejection, true);

        assert_eq!(totals1, totals2);
    }

    #[test]
    fn test_sequential_deal_only() {
        let totals = simulate_sequential(7, 25, SamplingStrategy::Selection, false);

        assert_eq!(totals.hands, 25);
        assert_eq!(totals.cards_played, 0);
        assert_eq!(totals.ticks, 0);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

use simrandom::Xoshiro256PlusPlus;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = if args.len() > 1 {
        args[1].parse().unwrap_or(1)
    } else {
        1
    };

    let count: usize = if args.len() > 2 {
        args[2].parse().unwrap_or(20)
    } else {
        20
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    for _ in 0..count {
        println!("{}", rng.next_u64());
    }
}

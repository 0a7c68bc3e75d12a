use cribsim_core::{HandDealer, SamplingStrategy};

fn main() {
    println!("Dealt Hands (Seed: 1)");
    println!("=====================\n");

    for strategy in [SamplingStrategy::Selection, SamplingStrategy::Rejection] {
        let mut dealer = HandDealer::with_strategy(1, strategy);
        let hand = dealer.deal();

        println!("{:?} sampling:", strategy);
        print!("  ");
        for card in hand.cards() {
            print!("{} ", card);
        }
        println!();
        println!(
            "  {} cards, counting total {}\n",
            hand.len(),
            hand.counting_total()
        );
    }

    // Play one hand out and show the turn count
    let mut dealer = HandDealer::new(1);
    let hand = dealer.deal();
    let record = dealer.split_and_play(hand);
    println!(
        "Play simulation: {} cards played in {} ticks",
        record.cards_played, record.ticks
    );
}

use liars_dice::{simulate, GameConfig, OddsStrategy, NaiveStrategy, Strategies, Strategy};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [players] [dice]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let players: usize = match args.get(2) {
        Some(p) => p.parse()?,
        None => 4,
    };
    let dice: usize = match args.get(3) {
        Some(d) => d.parse()?,
        None => 5,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    // Alternate seats between the two built-in strategies.
    let mut strategies: Strategies = (0..players)
        .map(|p| {
            let s: Box<dyn Strategy> = if p % 2 == 0 {
                Box::new(OddsStrategy::default())
            } else {
                Box::new(NaiveStrategy::default())
            };
            (p, s)
        })
        .collect();
    let names: Vec<String> = (0..players)
        .map(|p| strategies[&p].name().to_string())
        .collect();

    let config = GameConfig::new(players, dice);
    let outcome = simulate(&config, &mut strategies, &mut rng, None)?;

    let result = json!({
        "winner": outcome.winner,
        "winner_strategy": names[outcome.winner],
        "first_player": outcome.first_player,
        "total_bids": outcome.record.total_bids,
        "rounds": outcome.record.rounds,
        "challenges": outcome.record.challenges,
        "initial_counts": outcome.record.initial_counts,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

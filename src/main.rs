use liars_dice::{
    init_logging, run_tournament, Action, GameConfig, GameEngine, NaiveStrategy, OddsStrategy,
    PlayerId, Strategies, Strategy, TournamentConfig, TournamentReport, Verdict, DEFAULT_DICE,
    DEFAULT_PLAYERS,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyKind {
    Naive,
    Odds,
}

impl StrategyKind {
    fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Naive => Box::new(NaiveStrategy::default()),
            StrategyKind::Odds => Box::new(OddsStrategy::default()),
        }
    }
}

#[derive(Args, Clone, Debug)]
struct TableArgs {
    #[arg(long, default_value_t = DEFAULT_PLAYERS)]
    players: usize,
    #[arg(long, default_value_t = DEFAULT_DICE)]
    dice: usize,
    #[arg(long, help = "Losers drop one die instead of leaving the game")]
    special_rule: bool,
    #[arg(long, help = "Player that opens every round while still in the game")]
    first_caller: Option<PlayerId>,
    #[arg(long, help = "Keep seating order instead of shuffling each round")]
    fixed_order: bool,
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "odds",
        help = "Strategies assigned to seats in turn (e.g., --strategy odds,naive)"
    )]
    strategy: Vec<StrategyKind>,
    #[arg(long, help = "Abort a game after this many actions")]
    max_turns: Option<u64>,
}

impl TableArgs {
    fn game_config(&self) -> GameConfig {
        GameConfig::new(self.players, self.dice)
            .with_special_rule(self.special_rule)
            .with_first_caller(self.first_caller)
            .with_randomize_order(!self.fixed_order)
            .with_max_turns(self.max_turns)
    }

    fn strategies(&self) -> Strategies {
        (0..self.players)
            .map(|p| {
                let kind = self.strategy[p % self.strategy.len()];
                (p, kind.build())
            })
            .collect()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play many games and report win counts per seat.
    Simulate {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long, default_value_t = 1000)]
        games: u64,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Run games on all cores")]
        parallel: bool,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Play a single game and print every action.
    Replay {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn seed_or_random(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (results will be reproducible)", s);
            s
        }
        None => {
            use rand::Rng;
            rand::rng().random()
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            table,
            games,
            seed,
            parallel,
            json,
        } => {
            if table.strategy.is_empty() {
                anyhow::bail!("at least one strategy is required");
            }
            // Keep stdout pure JSON.
            let seed = match (seed, json) {
                (Some(s), true) => s,
                (s, _) => seed_or_random(s),
            };
            let config = TournamentConfig {
                game: table.game_config(),
                games,
                seed,
                parallel,
            };
            let report = run_tournament(&config, || table.strategies())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&table, &report);
            }
        }
        Commands::Replay { table, seed } => {
            if table.strategy.is_empty() {
                anyhow::bail!("at least one strategy is required");
            }
            let seed = seed_or_random(seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut strategies = table.strategies();
            let engine = GameEngine::new(table.game_config(), &mut rng)?;

            println!("Opening roll:");
            for (face, count) in engine.record().initial_counts.iter() {
                println!("  {}: {}", face, count);
            }
            let outcome = engine.run(&mut rng, &mut strategies)?;

            println!("\nActions:");
            for (i, event) in outcome.record.bids.iter().enumerate() {
                match event.action {
                    Action::Bid(bid) => println!("  {:>4}. player {} bids {}", i + 1, event.player, bid),
                    Action::Challenge => println!("  {:>4}. player {} calls liar", i + 1, event.player),
                }
            }
            println!("\nChallenges:");
            for c in &outcome.record.challenges {
                let verdict = match c.verdict {
                    Verdict::Valid => "valid",
                    Verdict::Invalid => "invalid",
                };
                println!(
                    "  turn {:>4}: player {} on {} -> {} ({} players), player {} keeps {} dice",
                    c.turn, c.challenger, c.bid, verdict, c.active_players, c.loser, c.loser_dice_left
                );
            }
            println!(
                "\nWinner: player {}, first player: {}, {} actions over {} rounds",
                outcome.winner, outcome.first_player, outcome.record.total_bids, outcome.record.rounds
            );
        }
    }
    Ok(())
}

fn print_report(table: &TableArgs, report: &TournamentReport) {
    println!("\nGame Results ({} games):", report.games);
    for p in 0..table.players {
        let kind = table.strategy[p % table.strategy.len()];
        println!(
            "  player{} ({:?}) wins: {} ({:.1}%)",
            p,
            kind,
            report.wins.get(&p).copied().unwrap_or(0),
            report.win_rate(p) * 100.0
        );
    }
    for p in 0..table.players {
        println!(
            "  game starts with player {}: {}",
            p,
            report.first_players.get(&p).copied().unwrap_or(0)
        );
    }
    if report.games > 0 {
        println!(
            "  average actions per game: {:.1}, average challenges per game: {:.1}",
            report.total_bids as f64 / report.games as f64,
            report.total_challenges as f64 / report.games as f64
        );
    }
}

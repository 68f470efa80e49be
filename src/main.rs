#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui, ConsoleStrategy, FleetManifest, GameMode, Match, MatchError, MatchStatus,
    Player, RandomStrategy, Seat, Strategy,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, value_enum, default_value_t = GameMode::Normal)]
        mode: GameMode,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn clear_terminal() {
    print!("\x1B[2J\x1B[1;1H");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { name, mode, seed } => {
            let mut rng = make_rng(seed);
            let mut game: Match = Match::new(Player::new(name.clone()), Player::new("Bot"));
            game.init(&FleetManifest::standard(), &mut rng)?;

            let mut human = ConsoleStrategy::stdio(name);
            let mut bot = RandomStrategy::new();
            let mut messages: Vec<String> = Vec::new();

            while game.status() == MatchStatus::InProgress {
                clear_terminal();
                print!("{}", ui::render(&game, Seat::First, mode));
                for line in &messages {
                    println!("{}", line);
                }
                let strategy: &mut dyn Strategy = match game.current() {
                    Seat::First => {
                        messages.clear();
                        &mut human
                    }
                    Seat::Second => &mut bot,
                };
                let outcome = match game.play_turn(strategy, &mut rng) {
                    Ok(outcome) => outcome,
                    Err(MatchError::Abandoned { player }) => {
                        println!("{} left the game. Game Over", player);
                        return Ok(());
                    }
                    Err(e) => return Err(e.into()),
                };
                messages.push(ui::describe(&game, &outcome));
            }

            messages.extend(ui::final_lines(&game));
            clear_terminal();
            print!("{}", ui::render(&game, Seat::First, GameMode::Easy));
            for line in &messages {
                println!("{}", line);
            }
        }
        Commands::Watch { seed } => {
            println!("Starting computer vs computer game...");
            let mut rng = make_rng(seed);
            let mut game: Match = Match::new(Player::new("Bot 1"), Player::new("Bot 2"));
            game.init(&FleetManifest::standard(), &mut rng)?;

            let mut first = RandomStrategy::new();
            let mut second = RandomStrategy::new();
            game.run([&mut first, &mut second], &mut rng)?;

            print!("{}", ui::render(&game, Seat::First, GameMode::Easy));
            for line in ui::final_lines(&game) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

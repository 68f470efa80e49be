use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{FleetManifest, Grid, Match, Player, RandomStrategy};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // each seed drives one side's layout; both together drive the shots
    let manifest = FleetManifest::standard();
    let grid1: Grid = Grid::generate(&manifest, &mut SmallRng::seed_from_u64(seed1))?;
    let grid2: Grid = Grid::generate(&manifest, &mut SmallRng::seed_from_u64(seed2))?;

    let mut game: Match = Match::new(Player::new("player1"), Player::new("player2"));
    game.start_with(grid1, grid2)?;

    let mut rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let mut p1 = RandomStrategy::new();
    let mut p2 = RandomStrategy::new();
    let summary = game.run([&mut p1, &mut p2], &mut rng)?;

    let result = json!({
        "winner": summary.winner,
        "loser": summary.loser,
        "scores": {
            "player1": game.player(seabattle::Seat::First).score(),
            "player2": game.player(seabattle::Seat::Second).score(),
        },
        "shots": summary.shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

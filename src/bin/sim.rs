#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde::Serialize;
#[cfg(feature = "std")]
use tictactoe::{init_logging, AiPlayer, Difficulty, Game, PlayerKind, Status};

#[cfg(feature = "std")]
#[derive(Serialize)]
struct Report {
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: u64,
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

#[cfg(feature = "std")]
fn difficulty(name: &str) -> anyhow::Result<Difficulty> {
    match name.parse::<PlayerKind>()? {
        PlayerKind::Ai(d) => Ok(d),
        PlayerKind::User => Err(anyhow::anyhow!("sim only plays computer players")),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 && args.len() != 5 {
        eprintln!("Usage: {} <x> <o> <games> [seed]", args[0]);
        std::process::exit(1);
    }
    let x = difficulty(&args[1])?;
    let o = difficulty(&args[2])?;
    let games: u32 = args[3].parse()?;
    let seed: u64 = match args.get(4) {
        Some(s) => s.parse()?,
        None => 0,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut report = Report {
        x,
        o,
        games,
        seed,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
    };
    for _ in 0..games {
        let mut game = Game::new(Box::new(AiPlayer::new(x)), Box::new(AiPlayer::new(o)));
        match game.run(&mut rng)? {
            Status::XWins => report.x_wins += 1,
            Status::OWins => report.o_wins += 1,
            Status::Draw => report.draws += 1,
            other => return Err(anyhow::anyhow!("game ended in unexpected state: {}", other)),
        }
    }

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

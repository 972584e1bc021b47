#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, Console, Game, Menu, PlayerKind};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a single game and exit. Players: user, easy, medium, hard.
    Play {
        /// Player placing X (moves first).
        x: String,
        /// Player placing O.
        o: String,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let console = Console::stdio();

    match cli.command {
        None => {
            let mut menu = Menu::new(console, rng);
            menu.run()?;
        }
        Some(Commands::Play { x, o }) => {
            let x_kind: PlayerKind = x.parse()?;
            let o_kind: PlayerKind = o.parse()?;
            let mut rng = rng;
            let mut game = Game::new(x_kind.build(console.clone()), o_kind.build(console.clone()));
            let mut out = console;
            game.play(&mut rng, &mut out)?;
        }
    }
    Ok(())
}

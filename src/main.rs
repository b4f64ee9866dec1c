#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_engine::{
    init_logging, Command, CommandOutcome, FileStore, GameEngine, Player, Scoreboard,
    ScoreboardReporter, SetupStatus, SCOREBOARD_KEY,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Scoreboard file (defaults to the well-known file in the working directory).
    #[arg(long, global = true)]
    scoreboard: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Apply a JSON array of commands to a new game and record the result.
    Replay {
        script: PathBuf,
        #[arg(long, default_value = "Player 1")]
        player_a: String,
        #[arg(long, default_value = "Player 2")]
        player_b: String,
        #[arg(long, help = "Seat a computer player (not on the scoreboard) at index 1")]
        computer_b: bool,
    },
    /// Print the ranked scoreboard.
    Scoreboard {
        #[arg(long, help = "Erase every entry before printing")]
        clear: bool,
    },
    /// Randomly place both fleets and print them.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut store = match cli.scoreboard {
        Some(path) => FileStore::new(path),
        None => FileStore::new(format!("{}.json", SCOREBOARD_KEY)),
    };

    match cli.command {
        Commands::Replay {
            script,
            player_a,
            player_b,
            computer_b,
        } => {
            let raw = std::fs::read_to_string(&script)?;
            let commands: Vec<Command> = serde_json::from_str(&raw)?;
            let players = [
                Player::human(player_a),
                if computer_b {
                    Player::Computer
                } else {
                    Player::human(player_b)
                },
            ];

            let mut engine = GameEngine::new();
            let mut outcomes: Vec<CommandOutcome> = Vec::with_capacity(commands.len());
            for (i, command) in commands.into_iter().enumerate() {
                let outcome = engine
                    .apply(command)
                    .map_err(|e| anyhow::anyhow!("command #{} failed: {}", i, e))?;
                outcomes.push(outcome);
            }

            let mut scoreboard = Scoreboard::load(&store);
            let recorded =
                ScoreboardReporter::new().submit(&engine, &players, &mut scoreboard, &mut store)?;
            let states = engine.players();
            let summary = json!({
                "game_id": engine.game_id(),
                "status": engine.status(),
                "winner": engine.winner(),
                "scores": [states[0].score, states[1].score],
                "turns": engine.history().len(),
                "outcomes": outcomes,
                "recorded": recorded,
            });
            println!("{}", serde_json::to_string(&summary)?);
        }
        Commands::Scoreboard { clear } => {
            let mut scoreboard = Scoreboard::load(&store);
            if clear {
                scoreboard.clear(&mut store)?;
            }
            println!("{}", serde_json::to_string_pretty(&scoreboard.ranked())?);
        }
        Commands::Demo { seed } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut engine = GameEngine::new();
            engine
                .set_game_status(SetupStatus::Configuring)
                .map_err(|e| anyhow::anyhow!(e))?;
            for player in 0..2 {
                engine
                    .auto_place(player, &mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            engine.start_game().map_err(|e| anyhow::anyhow!(e))?;
            let fleets: Vec<_> = engine.players().iter().map(|p| &p.ships).collect();
            println!("{}", serde_json::to_string(&json!({ "fleets": fleets }))?);
        }
    }
    Ok(())
}

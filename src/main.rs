#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use shipgame::{init_logging, render_fleet, script, BoardView, GameEngine, Role};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game script through the rules engine and report the result.
    Replay {
        /// Script with one `place` or `fire` command per line.
        script: PathBuf,
        #[arg(long, help = "Show unhit ship cells on both boards")]
        reveal: bool,
        #[arg(long, help = "Print a JSON summary instead of text")]
        json: bool,
    },
    /// Parse a game script without playing it.
    Check {
        script: PathBuf,
    },
}

#[cfg(feature = "std")]
fn load(path: &Path) -> anyhow::Result<Vec<(usize, script::Command)>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    script::parse_script(&text).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script: path,
            reveal,
            json,
        } => {
            let commands = load(&path)?;
            let mut engine = GameEngine::new();
            let steps = script::run(&mut engine, &commands);

            if json {
                let steps: Vec<_> = steps
                    .iter()
                    .map(|step| {
                        json!({
                            "line": step.line,
                            "command": step.command.to_string(),
                            "accepted": step.verdict.accepted(),
                            "result": step.verdict.to_string(),
                        })
                    })
                    .collect();
                let summary = json!({
                    "outcome": engine.current_state(),
                    "turn": engine.turn(),
                    "ships_remaining": {
                        "first": engine.ships_remaining(Role::First),
                        "second": engine.ships_remaining(Role::Second),
                    },
                    "steps": steps,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            for step in &steps {
                let marker = if step.verdict.accepted() { ' ' } else { '!' };
                println!("{}{:4}: {} -> {}", marker, step.line, step.command, step.verdict);
            }
            for role in Role::ALL {
                println!(
                    "\n{} board ({} ships remaining):",
                    role,
                    engine.ships_remaining(role)
                );
                println!("{}", BoardView::new(engine.player(role), reveal));
                let fleet = render_fleet(engine.player(role));
                if !fleet.is_empty() {
                    println!("Afloat (head, orientation, cells left):\n{}", fleet);
                }
            }
            println!("\nOutcome: {}", engine.current_state());
        }
        Commands::Check { script: path } => {
            let commands = load(&path)?;
            println!("{}: {} commands", path.display(), commands.len());
        }
    }
    Ok(())
}

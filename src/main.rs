//! Kniffel at the terminal.
//!
//! Creates, loads, lists and deletes saved games, then plays them turn by
//! turn. The game is saved before every prompt, so quitting at any point
//! loses nothing.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use kniffel::cli::{render_dice, render_scores, Command, HELP_TEXT};
use kniffel::core::{GameConfig, KniffelError};
use kniffel::game::Game;
use kniffel::persist;
use kniffel::strategy::GreedyStrategy;

#[derive(Parser)]
#[command(name = "kniffel")]
#[command(about = "Play Kniffel against friends and the computer")]
struct Args {
    /// Directory holding saved games
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Start a new game
    New {
        /// Number of human players
        #[arg(short, long, default_value = "1")]
        players: usize,

        /// Number of computer players
        #[arg(short, long, default_value = "1")]
        ai: usize,

        /// Dice seed (for reproducible games)
        #[arg(long)]
        seed: Option<u64>,

        /// Save name; defaults to the first free gameN
        #[arg(long)]
        name: Option<String>,
    },
    /// Continue a saved game
    Load { name: String },
    /// List saved games
    List,
    /// Delete a saved game
    Delete { name: String },
}

/// What the prompt loop does after a command.
enum Flow {
    Continue,
    Exit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match args.command {
        Mode::New {
            players,
            ai,
            seed,
            name,
        } => {
            let mut config = GameConfig::standard(players, ai);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let mut game = Game::new(&config)?;
            let name = match name {
                Some(name) => name,
                None => persist::next_save_name(&args.dir)?,
            };
            println!(
                "Game created at {}",
                persist::save_path(&args.dir, &name)?.display()
            );
            play(&mut game, &args.dir, &name)
        }
        Mode::Load { name } => {
            let mut game: Game = persist::load_game(&args.dir, &name)?;
            println!("Game {name} loaded!");
            play(&mut game, &args.dir, &name)
        }
        Mode::List => {
            let saves = persist::list_saves(&args.dir)?;
            if saves.is_empty() {
                println!("No games available");
            } else {
                println!("Available games:");
                for save in saves {
                    println!("\t{save}");
                }
            }
            Ok(())
        }
        Mode::Delete { name } => {
            persist::delete_save(&args.dir, &name)?;
            println!("Game {name} deleted");
            Ok(())
        }
    }
}

fn play(game: &mut Game, dir: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Welcome to Kniffel! Type \"help\" for commands.");
    announce_turn(game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        persist::save_game(dir, name, &*game)?;

        if game.is_over() {
            finish(game);
            return Ok(());
        }

        if game.active_player().is_auto() {
            let player = game.active_player().name().to_string();
            let outcome = game.play_auto_turn(&GreedyStrategy)?;
            println!("{player} scored {} in {}", outcome.score, outcome.category);
            println!("{}", render_scores(game));
            announce_turn(game);
            continue;
        }

        print!("[{}] Enter command: ", game.active_player().name());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            info!("input closed, leaving game");
            return Ok(());
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "rejected input");
                println!("{err}");
                continue;
            }
        };

        match execute(game, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) => {
                warn!(%err, "rejected command");
                println!("{err}");
            }
        }
    }
}

fn execute(game: &mut Game, command: Command) -> Result<Flow, KniffelError> {
    match command {
        Command::Roll => {
            game.roll()?;
            println!("{}", render_dice(game.dice()));
        }
        Command::Hold(indices) => {
            game.hold(&indices)?;
            println!("{}", render_dice(game.dice()));
        }
        Command::Unhold(indices) => {
            game.unhold(&indices)?;
            println!("{}", render_dice(game.dice()));
        }
        Command::Submit(index) => {
            let player = game.active_player().name().to_string();
            let outcome = game.submit_and_advance(index)?;
            println!("{player} scored {} in {}", outcome.score, outcome.category);
            if outcome.bonus > 0 {
                println!("Extra Kniffel! +{} bonus", outcome.bonus);
            }
            println!("{}", render_scores(game));
            announce_turn(game);
        }
        Command::Help => println!("{HELP_TEXT}"),
        Command::Score => println!("{}", render_scores(game)),
        Command::Dice => println!("{}", render_dice(game.dice())),
        Command::Reset => {
            game.reset()?;
            println!("Game reset");
            announce_turn(game);
        }
        Command::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn announce_turn(game: &Game) {
    if game.is_over() {
        return;
    }
    let player = game.active_player();
    println!("{}", "*".repeat(20));
    println!(
        "{} is now playing (round {}, {} rolls left)",
        player.name(),
        game.round(),
        player.rolls_remaining()
    );
    if !player.is_auto() {
        println!("{}", render_dice(game.dice()));
    }
}

fn finish(game: &Game) {
    println!("{}", "*".repeat(20));
    println!("\nGame over!\n");
    println!("{}", "*".repeat(20));
    println!("{}", render_scores(game));

    if let Some(result) = game.result() {
        let names: Vec<&str> = result
            .winners()
            .iter()
            .map(|id| game.player(*id).name())
            .collect();
        println!("Winner: {}", names.join(", "));
    }
    println!("\nThanks for playing!");
}

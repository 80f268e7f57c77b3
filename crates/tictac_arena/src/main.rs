//! tictac - position oracle CLI and headless arena.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tictac_arena::{
    ArenaConfig, BotPlayer, BotSeat, GameEvent, HumanPlayer, Match, Orchestrator, Outcome, Player,
};
use tictac_oracle::{Board, Player as Mark, StateClassifier, StateCode, TableStats};
use tokio::io::AsyncBufReadExt;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = ArenaConfig::load_or_default(&cli.config)?;
    let classifier = build_classifier().await?;

    match cli.command {
        Command::Classify { state, json } => classify(&classifier, state, json),
        Command::Show { state } => show(&classifier, state),
        Command::Stats { json } => stats(&classifier, json),
        Command::Play { first, bot, seed } => {
            let mut config = config;
            if let Some(first) = first {
                config = config.with_first_player(first.into());
            }
            if let Some(bot) = bot {
                config = config.with_bot_seat(bot.into());
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            play(classifier, config).await
        }
        Command::Simulate { games, first, seed } => {
            let mut config = config;
            if let Some(first) = first {
                config = config.with_first_player(first.into());
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            simulate(classifier, config, games).await
        }
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds the table off the async runtime and waits for it.
#[instrument]
async fn build_classifier() -> Result<Arc<StateClassifier>> {
    let classifier = tokio::task::spawn_blocking(StateClassifier::new).await?;
    Ok(Arc::new(classifier))
}

fn classify(classifier: &StateClassifier, state: i64, json: bool) -> Result<()> {
    let info = classifier.state_info(state)?;
    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
    } else {
        println!("{info}");
    }
    Ok(())
}

fn show(classifier: &StateClassifier, state: i64) -> Result<()> {
    let code = StateCode::new(state)?;
    println!("{}\n", Board::from_state(code).display());
    println!("{}", classifier.get(code));
    Ok(())
}

fn stats(classifier: &StateClassifier, json: bool) -> Result<()> {
    let stats = TableStats::collect(classifier);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{stats}");
    }
    Ok(())
}

/// Interactive games on stdin until input ends.
#[instrument(skip(classifier))]
async fn play(classifier: Arc<StateClassifier>, config: ArenaConfig) -> Result<()> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line_tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin closed");
    });
    let input = Arc::new(Mutex::new(line_rx));

    let delay = Duration::from_millis(*config.move_delay_ms());
    let seat = |mark: Mark| -> Box<dyn Player> {
        if config.bot_seat().player() == Some(mark) {
            let seed = config.bot_seed(mark);
            Box::new(BotPlayer::new(format!("Bot ({})", mark.mark()), seed).with_delay(delay))
        } else {
            Box::new(HumanPlayer::sharing(
                format!("You ({})", mark.mark()),
                Arc::clone(&input),
            ))
        }
    };
    let player_a = seat(Mark::A);
    let player_b = seat(Mark::B);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            print_event(&event);
        }
    });

    println!("Enter 1-9 to mark a cell (keypad order, top-left is 1). Ctrl-D quits.");
    if config.bot_seat() == &BotSeat::None {
        println!("Both sides are human.");
    }

    let game = Match::new(classifier, *config.winning_score());
    let mut orchestrator = Orchestrator::new(game, player_a, player_b, event_tx);
    let mut rng = seeded_rng(*config.seed());

    loop {
        let first = config.first_player().resolve(&mut rng);
        if let Err(e) = orchestrator.run_game(first).await {
            info!(error = %e, "Session ended");
            break;
        }
    }

    drop(orchestrator);
    printer.await?;
    Ok(())
}

/// Bot versus bot; prints the totals.
#[instrument(skip(classifier))]
async fn simulate(
    classifier: Arc<StateClassifier>,
    config: ArenaConfig,
    games: u32,
) -> Result<()> {
    let player_a = Box::new(BotPlayer::new("Bot A", config.bot_seed(Mark::A)));
    let player_b = Box::new(BotPlayer::new("Bot B", config.bot_seed(Mark::B)));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let drain = tokio::spawn(async move { while event_rx.recv().await.is_some() {} });

    // Totals are kept here because the match resets its tallies at the target.
    let game = Match::new(classifier, u32::MAX);
    let mut orchestrator = Orchestrator::new(game, player_a, player_b, event_tx);
    let mut rng = seeded_rng(*config.seed());
    let (mut a_wins, mut b_wins, mut draws) = (0u32, 0u32, 0u32);

    for _ in 0..games {
        let first = config.first_player().resolve(&mut rng);
        match orchestrator.run_game(first).await? {
            Outcome::Won(Mark::A, _) => a_wins += 1,
            Outcome::Won(Mark::B, _) => b_wins += 1,
            Outcome::Draw => draws += 1,
        }
    }

    drop(orchestrator);
    drain.await?;
    println!("games: {games}  PlayerA: {a_wins}  PlayerB: {b_wins}  draws: {draws}");
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::GameStarted { first } => {
            println!("\nNew game, {} ({}) opens.", first, first.mark())
        }
        GameEvent::MoveMade {
            player, position, ..
        } => println!("{player} -> {position}"),
        GameEvent::BoardChanged(board) => println!("{board}\n"),
        GameEvent::GameOver { outcome, score } => match outcome {
            Outcome::Won(winner, _) => println!("{winner} wins. Score {score}"),
            Outcome::Draw => println!("Draw. Score {score}"),
        },
    }
}

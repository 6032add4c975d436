//! Play Binary
//!
//! Terminal front-end for the drill: shows the computer's hand and required
//! outcome, asks for a gesture, reports the verdict and score.
//!
//! Options: --seed, --rounds, --history

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use log::info;
use rps_engine::core::{EngineConfig, Gesture, Verdict};
use rps_engine::game::{LoggingObserver, RoundRecord, Session};

#[derive(Parser, Debug)]
#[command(name = "play", about = "Rock-paper-scissors reflex drill")]
struct Args {
    /// RNG seed; replaying a seed replays the same rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u64>,

    /// Resolved rounds to keep for the summary
    #[arg(long, default_value_t = 100)]
    history: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = EngineConfig {
        seed: args.seed,
        history_capacity: args.history,
    };
    let mut session = Session::new(&config);
    session.subscribe(Box::new(LoggingObserver));
    info!("session seed {}", session.state().seed());

    let choices: Vec<String> = Gesture::ALL
        .iter()
        .map(|g| format!("{} {}", g.emoji(), g.label()))
        .collect();

    loop {
        render_prompt(&session);

        let Some(index) = Select::new()
            .with_prompt("Your move")
            .items(&choices)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        session.resolve_round(Gesture::from_index(index))?;
        if let Some(record) = session.pending() {
            render_verdict(record, &session);
        }

        if args.rounds.is_some_and(|limit| session.round_number() >= limit) {
            break;
        }

        let acknowledged = Select::new().items(&["Ok"]).default(0).interact_opt()?;
        if acknowledged.is_none() {
            break;
        }
        session.start_next_round()?;
    }

    render_summary(&session);
    Ok(())
}

fn render_prompt(session: &Session) {
    let round = session.round();
    println!();
    println!("{}", format!("  Round {}", session.round_number()).dimmed());
    println!("{}", format!(" {} ", round.prompt()).white().on_blue().bold());
    println!("  {}", round.computer_gesture.emoji());
    println!();
}

fn render_verdict(record: &RoundRecord, session: &Session) {
    let message = match record.verdict {
        Verdict::Win => record.verdict.message().bright_green().bold(),
        Verdict::Lose => record.verdict.message().red().bold(),
    };
    println!();
    println!("{}", session.scoreboard().score_title().bold());
    println!("{}", message);
    if !record.verdict.is_win() {
        println!(
            "{}",
            format!("  {} was required", record.required_gesture).dimmed()
        );
    }
}

fn render_summary(session: &Session) {
    let board = session.scoreboard();
    println!();
    println!("{}", "=".repeat(40));
    println!("{}", "  Session Summary".bright_cyan().bold());
    println!("{}", "=".repeat(40));
    println!("  Rounds played: {}", board.rounds_played);
    println!("  Score:         {}", board.score.to_string().bright_green());
    match board.accuracy() {
        Some(accuracy) => println!("  Accuracy:      {:.0}%", accuracy * 100.0),
        None => println!("  Accuracy:      -"),
    }
    println!("  Best streak:   {}", board.best_streak);
    println!("{}", format!("  Replay with --seed {}", session.state().seed()).dimmed());
}

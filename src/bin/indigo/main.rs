//! indigo - play Indigo against the computer in a terminal.
//!
//! Game text goes to stdout; diagnostics go to stderr and are filtered with
//! `RUST_LOG` (default `warn`).
//!
//! Usage: indigo [--seed <u64>] [--first <yes|no>] [--hide-computer-hand]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use indigo::{
    Card, DealError, FinalResult, Game, GameOptions, Participant, PlayError, Scoreboard, Table,
    TurnReport,
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "indigo")]
#[command(about = "Play the Indigo card game against the computer")]
#[command(version)]
struct Args {
    /// Seed for the shuffle and the computer's choices (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Answer the "Play first?" prompt up front
    #[arg(long, value_parser = parse_yes_no)]
    first: Option<bool>,

    /// Do not print the computer's hand before it plays
    #[arg(long)]
    hide_computer_hand: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// A validated choice from the card prompt.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    /// 1-based position in the hand.
    Card(usize),
    Exit,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    match run(&args, &mut input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("indigo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn run(args: &Args, input: &mut impl BufRead) -> Result<(), CliError> {
    println!("Indigo Card Game");

    let player_first = match args.first {
        Some(first) => first,
        None => match ask_play_first(input) {
            Some(first) => first,
            None => {
                println!("Game Over");
                return Ok(());
            }
        },
    };

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(seed, player_first, "starting game");

    let options = GameOptions::default()
        .with_player_first(player_first)
        .with_reveal_computer_hand(!args.hide_computer_hand);
    let mut game = Game::new(options, seed);

    let initial = game.start()?;
    println!("Initial cards on the table: {}", join_cards(&initial));

    while !game.state().is_over() {
        announce_table(game.table());

        let report = match game.turn() {
            Participant::Player => {
                let hand = game.hand(Participant::Player);
                println!("Cards in hand: {}", numbered_cards(hand));
                match ask_card(input, hand.len()) {
                    Choice::Card(position) => game.play_card(position - 1)?,
                    Choice::Exit => {
                        if let Some(board) = game.exit()? {
                            print_scoreboard(&board);
                        }
                        break;
                    }
                }
            }
            Participant::Computer => {
                if game.options().reveal_computer_hand {
                    println!("{}", join_cards(game.hand(Participant::Computer)));
                }
                let report = game.computer_play()?;
                println!("Computer plays {}", report.card);
                report
            }
        };

        print_report(&report, &game.scoreboard());
    }

    println!("Game Over");
    Ok(())
}

fn print_report(report: &TurnReport, board: &Scoreboard) {
    if let Some(capture) = report.capture {
        println!("{} wins cards", capture.by);
        if report.finished.is_none() {
            print_scoreboard(board);
        }
    }

    if let Some(result) = report.finished {
        print_final(report.card, &result);
    }
}

fn print_final(top: Card, result: &FinalResult) {
    if let Some(pile) = result.remaining_table {
        println!("\n{} cards on the table, and the top card is {top}", pile.cards);
    }
    print_scoreboard(&result.scoreboard);
}

fn announce_table(table: &Table) {
    match table.top() {
        None => println!("\nNo cards on the table"),
        Some(top) => println!("\n{} cards on the table, and the top card is {top}", table.len()),
    }
}

fn print_scoreboard(board: &Scoreboard) {
    println!(
        "Score: Player {} - Computer {}",
        board.player.score, board.computer.score
    );
    println!(
        "Cards: Player {} - Computer {}",
        board.player.cards_won, board.computer.cards_won
    );
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn numbered_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}){card}", index + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_line(input: &mut impl BufRead) -> Option<String> {
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn parse_yes_no(text: &str) -> Result<bool, String> {
    match text.to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(format!("expected yes or no, got {text:?}")),
    }
}

/// Asks until the answer is yes or no. `None` when input runs out.
fn ask_play_first(input: &mut impl BufRead) -> Option<bool> {
    loop {
        println!("Play first?");
        if let Ok(first) = parse_yes_no(&read_line(input)?) {
            return Some(first);
        }
    }
}

/// Asks until the answer is `exit` or a position in `1..=hand_len`.
/// Running out of input counts as `exit`.
fn ask_card(input: &mut impl BufRead, hand_len: usize) -> Choice {
    loop {
        println!("Choose a card to play (1-{hand_len}):");
        let Some(answer) = read_line(input) else {
            return Choice::Exit;
        };

        if answer == "exit" {
            return Choice::Exit;
        }
        match answer.parse::<usize>() {
            Ok(position) if (1..=hand_len).contains(&position) => return Choice::Card(position),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn play_first_accepts_yes_or_no_in_any_case() {
        assert_eq!(ask_play_first(&mut Cursor::new("maybe\nYES\n")), Some(true));
        assert_eq!(ask_play_first(&mut Cursor::new("No\n")), Some(false));
        assert_eq!(ask_play_first(&mut Cursor::new("  yes  \n")), Some(true));
    }

    #[test]
    fn play_first_gives_up_when_input_runs_out() {
        assert_eq!(ask_play_first(&mut Cursor::new("")), None);
        assert_eq!(ask_play_first(&mut Cursor::new("y\nn\n")), None);
    }

    #[test]
    fn card_prompt_repeats_until_position_is_in_range() {
        let mut input = Cursor::new("0\n7\nx\n3\n");
        assert_eq!(ask_card(&mut input, 6), Choice::Card(3));

        let mut input = Cursor::new("-1\n6\n");
        assert_eq!(ask_card(&mut input, 6), Choice::Card(6));

        let mut input = Cursor::new("2\n");
        assert_eq!(ask_card(&mut input, 1), Choice::Exit);
    }

    #[test]
    fn card_prompt_exits_on_command_or_end_of_input() {
        assert_eq!(ask_card(&mut Cursor::new("exit\n"), 6), Choice::Exit);
        assert_eq!(ask_card(&mut Cursor::new("foo\nexit\n4\n"), 6), Choice::Exit);
        assert_eq!(ask_card(&mut Cursor::new(""), 6), Choice::Exit);
    }

    #[test]
    fn first_flag_parses_yes_and_no() {
        assert_eq!(parse_yes_no("yes"), Ok(true));
        assert_eq!(parse_yes_no("NO"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());

        let args = Args::try_parse_from(["indigo", "--first", "Yes", "--seed", "5"]).unwrap();
        assert_eq!(args.first, Some(true));
        assert_eq!(args.seed, Some(5));
        assert!(!args.hide_computer_hand);
        assert!(Args::try_parse_from(["indigo", "--first", "sure"]).is_err());
    }
}

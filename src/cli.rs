use std::thread;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

use crate::cards::{parse_board, parse_hole, Card, Deck};
use crate::display::{board_display, equity_bar, print_error, tally_table};
use crate::enumerate::{Spot, Tally};
use crate::error::EquityResult;
use crate::evaluator::evaluate_best;
use crate::partition::partition_and_run;

#[derive(Parser)]
#[command(
    name = "equity",
    version,
    about = "Exact Texas Hold'em equity — win/lose/tie by full enumeration, no sampling."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exact equity for a hero hand vs a fixed hand or any two cards
    Odds {
        /// Hero hole cards, e.g. AcQh
        hero: String,
        /// Villain hole cards; omit to enumerate every remaining combo
        #[arg(long)]
        vs: Option<String>,
        /// Known community cards, e.g. KhQd2s
        #[arg(short, long)]
        board: Option<String>,
        /// Number of enumeration workers (default: available CPUs)
        #[arg(short, long)]
        workers: Option<usize>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Best 5-card hand from 5 or more cards
    Rank {
        /// Cards, e.g. AsKsQsJsTs9h
        cards: String,
    },
}

#[derive(Serialize)]
struct OddsOutput {
    hero: String,
    villain: Option<String>,
    board: String,
    workers: usize,
    wins: u64,
    losses: u64,
    ties: u64,
    total: u64,
    win: f64,
    lose: f64,
    tie: f64,
    equity: f64,
}

pub fn run() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Odds {
            hero,
            vs,
            board,
            workers,
            json,
        } => cmd_odds(&hero, vs.as_deref(), board.as_deref(), workers, json),
        Commands::Rank { cards } => cmd_rank(&cards),
    };
    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

fn cmd_odds(
    hero: &str,
    vs: Option<&str>,
    board: Option<&str>,
    workers: Option<usize>,
    json: bool,
) -> EquityResult<()> {
    let hero = parse_hole(hero)?;
    let villain = vs.map(parse_hole).transpose()?;
    let board: Vec<Card> = board.map(parse_board).transpose()?.unwrap_or_default();

    let mut dead: Vec<Card> = Vec::with_capacity(9);
    dead.extend_from_slice(&hero);
    if let Some(v) = villain {
        dead.extend_from_slice(&v);
    }
    dead.extend_from_slice(&board);

    let spot = Spot::new(hero, villain, &board, Deck::new(Some(&dead)))?;
    let workers = workers.unwrap_or_else(default_workers);
    let tally = partition_and_run(&spot, workers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&odds_output(&spot, &tally, workers))?);
    } else {
        print_odds(&spot, &tally, workers);
    }
    Ok(())
}

fn odds_output(spot: &Spot, tally: &Tally, workers: usize) -> OddsOutput {
    let breakdown = tally.breakdown();
    OddsOutput {
        hero: format!("{}{}", spot.hero[0], spot.hero[1]),
        villain: spot.villain.map(|v| format!("{}{}", v[0], v[1])),
        board: spot.board.iter().map(Card::to_string).collect(),
        workers,
        wins: tally.wins,
        losses: tally.losses,
        ties: tally.ties,
        total: tally.total(),
        win: breakdown.win,
        lose: breakdown.lose,
        tie: breakdown.tie,
        equity: breakdown.equity(),
    }
}

fn print_odds(spot: &Spot, tally: &Tally, workers: usize) {
    let villain = match spot.villain {
        Some(v) => board_display(&v),
        None => "any two cards".dimmed().to_string(),
    };
    let board = if spot.board.is_empty() {
        "preflop".dimmed().to_string()
    } else {
        board_display(&spot.board)
    };

    println!();
    println!(
        "  {}  vs  {}  on  {}   ({} outcomes, {} workers)",
        board_display(&spot.hero),
        villain,
        board,
        tally.total(),
        workers,
    );
    println!();
    println!("{}", tally_table(tally));
    println!();
    println!("  Equity  {}", equity_bar(tally.breakdown().equity(), 40));
    println!();
}

fn cmd_rank(cards: &str) -> EquityResult<()> {
    let cards = parse_board(cards)?;
    let strength = evaluate_best(&cards)?;
    println!();
    println!(
        "  {}  \u{2192}  {}",
        board_display(&cards),
        strength.to_string().bold(),
    );
    println!();
    Ok(())
}

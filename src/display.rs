use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::enumerate::Tally;

pub fn print_error(msg: &str) {
    eprintln!("  {} {}", "Error:".red().bold(), msg);
}

pub fn equity_bar(equity: f64, width: usize) -> String {
    let filled = (equity * width as f64) as usize;
    let bar: String = "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width - filled);
    let pct = format!("{:.2}%", equity * 100.0);

    if equity >= 0.6 {
        format!("{} {}", bar.green(), pct)
    } else if equity >= 0.4 {
        format!("{} {}", bar.yellow(), pct)
    } else {
        format!("{} {}", bar.red(), pct)
    }
}

pub fn board_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let rank = card.rank.to_char();
            let symbol = card.suit.symbol();
            let colored = match card.suit {
                Suit::Spades => format!("{}{}", rank, symbol).white().to_string(),
                Suit::Hearts => format!("{}{}", rank, symbol).red().to_string(),
                Suit::Diamonds => format!("{}{}", rank, symbol).blue().to_string(),
                Suit::Clubs => format!("{}{}", rank, symbol).green().to_string(),
            };
            colored
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact outcome counts as a terminal table.
pub fn tally_table(tally: &Tally) -> Table {
    let breakdown = tally.breakdown();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Outcome"),
        Cell::new("Count").set_alignment(CellAlignment::Right),
        Cell::new("Frequency").set_alignment(CellAlignment::Right),
    ]);

    let rows = [
        ("Win", tally.wins, breakdown.win),
        ("Lose", tally.losses, breakdown.lose),
        ("Tie", tally.ties, breakdown.tie),
    ];
    for (label, count, freq) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}%", freq * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold().to_string()),
        Cell::new(tally.total().to_string()).set_alignment(CellAlignment::Right),
        Cell::new("100%").set_alignment(CellAlignment::Right),
    ]);
    table
}

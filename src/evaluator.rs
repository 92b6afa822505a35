use itertools::Itertools;

use crate::cards::Card;
use crate::error::{EquityError, EquityResult};
use crate::ranking::{rank_five, HandStrength};

/// Best 5-card strength over every 5-subset of the given cards.
///
/// Works for any K >= 5; the usual callers hand in 6 or 7 cards (two hole
/// cards plus a partial or full board). The input is never mutated and the
/// result does not depend on its ordering.
pub fn evaluate_best(cards: &[Card]) -> EquityResult<HandStrength> {
    if cards.len() < 5 {
        return Err(EquityError::NotEnoughCards {
            need: 5,
            got: cards.len(),
        });
    }

    let mut best: Option<HandStrength> = None;
    for combo in cards.iter().combinations(5) {
        let five = [*combo[0], *combo[1], *combo[2], *combo[3], *combo[4]];
        let strength = rank_five(&five)?;
        if best.map_or(true, |b| strength > b) {
            best = Some(strength);
        }
    }

    // At least one combination exists since len >= 5.
    Ok(best.unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_board;
    use crate::ranking::HandCategory;

    #[test]
    fn test_picks_best_subset() {
        // Seven cards holding both a flush and a straight: flush wins.
        let cards = parse_board("As7s5s3s2s6h4d").unwrap();
        let strength = evaluate_best(&cards).unwrap();
        assert_eq!(strength.category(), HandCategory::Flush);
    }

    #[test]
    fn test_order_independent() {
        let cards = parse_board("AsKdQh7c7h2s9d").unwrap();
        let base = evaluate_best(&cards).unwrap();
        let mut reversed = cards.clone();
        reversed.reverse();
        assert_eq!(evaluate_best(&reversed).unwrap(), base);
    }

    #[test]
    fn test_exactly_five_passes_through() {
        let cards = parse_board("AsKdQh7c2s").unwrap();
        assert_eq!(
            evaluate_best(&cards).unwrap(),
            rank_five(&cards).unwrap()
        );
    }

    #[test]
    fn test_too_few_cards() {
        let cards = parse_board("AsKdQh2s").unwrap();
        assert!(matches!(
            evaluate_best(&cards),
            Err(EquityError::NotEnoughCards { need: 5, got: 4 })
        ));
    }
}

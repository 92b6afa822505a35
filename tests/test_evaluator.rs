use equity_cli::cards::{parse_board, parse_card, Card};
use equity_cli::evaluator::evaluate_best;
use equity_cli::ranking::HandCategory;

fn c(notation: &str) -> Card {
    parse_card(notation).unwrap()
}

fn best_category(hole: &[Card], board: &str) -> HandCategory {
    let mut cards = hole.to_vec();
    cards.extend(parse_board(board).unwrap());
    evaluate_best(&cards).unwrap().category()
}

#[test]
fn test_royal_flush() {
    let cat = best_category(&[c("As"), c("Ks")], "QsTsJs2h3d");
    assert_eq!(cat, HandCategory::StraightFlush);
}

#[test]
fn test_straight_flush() {
    let cat = best_category(&[c("9h"), c("8h")], "7h6h5hAcKd");
    assert_eq!(cat, HandCategory::StraightFlush);
}

#[test]
fn test_four_of_a_kind() {
    let cat = best_category(&[c("Ks"), c("Kh")], "KdKc5s2h3d");
    assert_eq!(cat, HandCategory::FourOfAKind);
}

#[test]
fn test_full_house() {
    let cat = best_category(&[c("As"), c("Ah")], "AdKsKh2c3d");
    assert_eq!(cat, HandCategory::FullHouse);
}

#[test]
fn test_flush() {
    let cat = best_category(&[c("As"), c("Ts")], "8s5s2sKdQh");
    assert_eq!(cat, HandCategory::Flush);
}

#[test]
fn test_straight() {
    let cat = best_category(&[c("9s"), c("8h")], "7d6c5sAhKd");
    assert_eq!(cat, HandCategory::Straight);
}

#[test]
fn test_wheel_from_seven() {
    let cat = best_category(&[c("As"), c("2h")], "3d4c5sKhQd");
    assert_eq!(cat, HandCategory::Straight);
}

#[test]
fn test_three_of_a_kind() {
    let cat = best_category(&[c("Qs"), c("Qh")], "Qd7s3h2cKd");
    assert_eq!(cat, HandCategory::ThreeOfAKind);
}

#[test]
fn test_two_pair() {
    let cat = best_category(&[c("As"), c("Kh")], "AdKs5c2h3d");
    assert_eq!(cat, HandCategory::TwoPair);
}

#[test]
fn test_one_pair() {
    let cat = best_category(&[c("As"), c("Ah")], "Kd7s3c2h5d");
    assert_eq!(cat, HandCategory::OnePair);
}

#[test]
fn test_high_card() {
    let cat = best_category(&[c("As"), c("Kh")], "Qd9s3c2h5d");
    assert_eq!(cat, HandCategory::HighCard);
}

#[test]
fn test_not_enough_cards() {
    assert!(evaluate_best(&[c("As"), c("Kh"), c("Qd")]).is_err());
}

#[test]
fn test_flush_beats_straight_across_hands() {
    let board = parse_board("7s6s5s4dAh").unwrap();
    let mut flush_cards = vec![c("As"), c("2s")];
    flush_cards.extend_from_slice(&board);
    let mut straight_cards = vec![c("8h"), c("9h")];
    straight_cards.extend_from_slice(&board);
    assert!(evaluate_best(&flush_cards).unwrap() > evaluate_best(&straight_cards).unwrap());
}

#[test]
fn test_kicker_decides_across_hands() {
    let board = parse_board("As5d8cTh3d").unwrap();
    let mut ak = vec![c("Ad"), c("Kh")];
    ak.extend_from_slice(&board);
    let mut aq = vec![c("Ah"), c("Qd")];
    aq.extend_from_slice(&board);
    assert!(evaluate_best(&ak).unwrap() > evaluate_best(&aq).unwrap());
}

#[test]
fn test_board_plays_for_both() {
    let board = parse_board("AsKdQhJsTs").unwrap();
    let mut low1 = vec![c("2h"), c("3d")];
    low1.extend_from_slice(&board);
    let mut low2 = vec![c("4h"), c("5d")];
    low2.extend_from_slice(&board);
    assert_eq!(evaluate_best(&low1).unwrap(), evaluate_best(&low2).unwrap());
}

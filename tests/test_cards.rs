use equity_cli::cards::*;
use equity_cli::error::EquityError;

#[test]
fn test_card_creation() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert_eq!(c.value(), 14);
}

#[test]
fn test_invalid_rank() {
    assert!(Rank::from_char('X').is_err());
}

#[test]
fn test_invalid_suit() {
    assert!(Suit::from_char('x').is_err());
}

#[test]
fn test_card_str() {
    let c = Card::new(Rank::King, Suit::Diamonds);
    assert_eq!(format!("{}", c), "Kd");
}

#[test]
fn test_card_pretty() {
    let c = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(c.pretty(), "A\u{2660}");
}

#[test]
fn test_card_equality() {
    let a1 = Card::new(Rank::Ace, Suit::Spades);
    let a2 = Card::new(Rank::Ace, Suit::Spades);
    let a3 = Card::new(Rank::Ace, Suit::Hearts);
    assert_eq!(a1, a2);
    assert_ne!(a1, a3);
}

#[test]
fn test_parse_card() {
    let c = parse_card("As").unwrap();
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert!(parse_card("A").is_err());
    assert!(parse_card("Xx").is_err());
}

#[test]
fn test_parse_board() {
    let board = parse_board("KhQd2s").unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0], Card::new(Rank::King, Suit::Hearts));
    assert!(parse_board("KhQ").is_err());
}

#[test]
fn test_parse_hole() {
    let hole = parse_hole("AcQh").unwrap();
    assert_eq!(hole[0], Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(hole[1], Card::new(Rank::Queen, Suit::Hearts));
    assert!(matches!(
        parse_hole("AcQhKs"),
        Err(EquityError::InvalidHandSize)
    ));
}

#[test]
fn test_full_deck() {
    let deck = Deck::new(None);
    assert_eq!(deck.len(), 52);
}

#[test]
fn test_deck_excludes_dealt() {
    let dealt = parse_board("AsKh").unwrap();
    let deck = Deck::new(Some(&dealt));
    assert_eq!(deck.len(), 50);
    assert!(!deck.contains(dealt[0]));
    assert!(!deck.contains(dealt[1]));
}

#[test]
fn test_deck_remove() {
    let mut deck = Deck::new(None);
    let card = parse_card("7d").unwrap();
    assert_eq!(deck.remove(card).unwrap(), card);
    assert_eq!(deck.len(), 51);
    assert!(!deck.contains(card));
    assert!(matches!(
        deck.remove(card),
        Err(EquityError::CardNotInDeck(_))
    ));
}

#[test]
fn test_deck_shrinks_monotonically() {
    let mut deck = Deck::new(None);
    for (i, card) in parse_board("2c3c4c5c").unwrap().into_iter().enumerate() {
        deck.remove(card).unwrap();
        assert_eq!(deck.len(), 51 - i);
    }
}

#[test]
fn test_shuffle_keeps_the_same_set() {
    let mut deck = Deck::new(None);
    deck.shuffle();
    assert_eq!(deck.len(), 52);
    let mut sorted: Vec<String> = deck.iter().map(|c| c.to_string()).collect();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 52);
}

//! Card and board formatters for terminal display.
//!
//! Pure functions turning engine card values into strings. Unicode suit
//! symbols are used where the terminal supports them, with single-letter
//! ASCII fallback otherwise.
//!
//! ## Example
//!
//! ```rust
//! use pokerc_engine::cards::{Card, Rank, Suit};
//! use pokerc_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_cards(&board).starts_with("[A"));
//! ```

use pokerc_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments. On Windows, checks for Windows Terminal
/// (WT_SESSION), modern terminals (TERM_PROGRAM), or VS Code
/// (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a suit as `♠ ♥ ♦ ♣` or the ASCII fallback `s h d c`.
pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        }
    }
}

/// Format a rank as `2`-`10` or `J Q K A`.
pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

/// Format a card as rank followed by suit, e.g. `A♠` or `As`.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// Format a card sequence as `[A♠ K♦ 10♣]`.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

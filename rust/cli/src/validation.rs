//! Card-token parsing and input validation.
//!
//! Card tokens pair a 2-character suit code with a rank token:
//!
//! - Suit codes: `BS` (spades), `RH` (hearts), `BD` (diamonds), `RC` (clubs)
//! - Rank tokens: `2`-`10` numeric, `J`, `Q`, `K`, `A` symbolic
//!
//! Tokens are case-insensitive: `bsa`, `BSA`, and `bsA` all name the ace of
//! spades. Numeric ranks outside 2-10 (`1`, `14`, ...) are rejected; face
//! cards and the ace are symbolic only. Everything here returns
//! `Result<_, String>` so command handlers can surface the message verbatim.

use std::collections::HashSet;

use pokerc_engine::cards::{Card, Rank, Suit};

/// Parse a single card token such as `BSA` or `rh10`.
pub fn parse_card(token: &str) -> Result<Card, String> {
    let t = token.trim().to_ascii_uppercase();
    // char boundary check keeps split_at from panicking on multibyte input
    if t.len() < 3 || !t.is_char_boundary(2) {
        return Err(format!(
            "Invalid card '{}': expected a 2-letter suit code followed by a rank",
            token
        ));
    }
    let (suit_code, rank_code) = t.split_at(2);

    let suit = match suit_code {
        "BS" => Suit::Spades,
        "RH" => Suit::Hearts,
        "BD" => Suit::Diamonds,
        "RC" => Suit::Clubs,
        _ => return Err(format!("Invalid suit: {}", suit_code)),
    };

    let rank = match rank_code {
        "A" => Rank::Ace,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        numeric => numeric
            .parse::<u8>()
            .ok()
            .filter(|v| (2..=10).contains(v))
            .and_then(Rank::from_u8)
            .ok_or_else(|| format!("Invalid rank: {}", rank_code))?,
    };

    Ok(Card { suit, rank })
}

/// Parse the hero hand: one argument holding exactly two card tokens.
pub fn parse_hand(input: &str) -> Result<[Card; 2], String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(format!(
            "Hand must be exactly 2 cards, got {}",
            tokens.len()
        ));
    }
    Ok([parse_card(tokens[0])?, parse_card(tokens[1])?])
}

/// Parse the known community cards; only 0, 3, 4, or 5 are legal counts.
pub fn parse_board(tokens: &[String]) -> Result<Vec<Card>, String> {
    if !matches!(tokens.len(), 0 | 3 | 4 | 5) {
        return Err(
            "Invalid number of community cards. Must be 0, 3, 4, or 5.".to_string(),
        );
    }
    tokens.iter().map(|t| parse_card(t)).collect()
}

/// Parse a free-form card list (the `eval` command), enforcing a count range
/// and rejecting duplicates.
pub fn parse_cards(input: &str, min: usize, max: usize) -> Result<Vec<Card>, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() < min || tokens.len() > max {
        return Err(format!(
            "Expected {} to {} cards, got {}",
            min,
            max,
            tokens.len()
        ));
    }
    let mut cards = Vec::with_capacity(tokens.len());
    let mut seen = HashSet::new();
    for token in tokens {
        let card = parse_card(token)?;
        if !seen.insert(card) {
            return Err(format!("Duplicate card: {}", token.to_ascii_uppercase()));
        }
        cards.push(card);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbolic_ranks() {
        assert_eq!(
            parse_card("BSA").unwrap(),
            Card {
                suit: Suit::Spades,
                rank: Rank::Ace
            }
        );
        assert_eq!(
            parse_card("RHJ").unwrap(),
            Card {
                suit: Suit::Hearts,
                rank: Rank::Jack
            }
        );
        assert_eq!(
            parse_card("BDQ").unwrap(),
            Card {
                suit: Suit::Diamonds,
                rank: Rank::Queen
            }
        );
        assert_eq!(
            parse_card("RCK").unwrap(),
            Card {
                suit: Suit::Clubs,
                rank: Rank::King
            }
        );
    }

    #[test]
    fn parses_numeric_ranks() {
        assert_eq!(parse_card("BS2").unwrap().rank, Rank::Two);
        assert_eq!(parse_card("RH10").unwrap().rank, Rank::Ten);
        assert_eq!(parse_card("BD9").unwrap().rank, Rank::Nine);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse_card("bsa").unwrap(), parse_card("BSA").unwrap());
        assert_eq!(parse_card("rh10").unwrap(), parse_card("RH10").unwrap());
    }

    #[test]
    fn rejects_bad_suits() {
        for token in ["XXA", "B5A", "GH2"] {
            let err = parse_card(token).unwrap_err();
            assert!(err.contains("Invalid suit"), "{}: {}", token, err);
        }
    }

    #[test]
    fn rejects_multibyte_tokens_without_panicking() {
        assert!(parse_card("♠A2").is_err());
        assert!(parse_card("é♦3").is_err());
    }

    #[test]
    fn rejects_bad_ranks() {
        for token in ["BS1", "BS14", "BS11", "BS0", "BSX", "BS"] {
            assert!(parse_card(token).is_err(), "{} should be rejected", token);
        }
    }

    #[test]
    fn hand_must_have_exactly_two_tokens() {
        assert!(parse_hand("BSA RHA").is_ok());
        assert!(parse_hand("BSA").is_err());
        assert!(parse_hand("BSA RHA BD2").is_err());
        assert!(parse_hand("").is_err());
    }

    #[test]
    fn board_counts_follow_poker_streets() {
        let t = |tokens: &[&str]| -> Vec<String> {
            tokens.iter().map(|s| s.to_string()).collect()
        };
        assert_eq!(parse_board(&t(&[])).unwrap().len(), 0);
        assert_eq!(parse_board(&t(&["BS2", "RH3", "BD4"])).unwrap().len(), 3);
        assert_eq!(
            parse_board(&t(&["BS2", "RH3", "BD4", "RC5"])).unwrap().len(),
            4
        );
        assert_eq!(
            parse_board(&t(&["BS2", "RH3", "BD4", "RC5", "BS6"]))
                .unwrap()
                .len(),
            5
        );
        for n in [1, 2, 6] {
            let tokens: Vec<String> = ["BS2", "RH3", "BD4", "RC5", "BS6", "RH7"][..n]
                .iter()
                .map(|s| s.to_string())
                .collect();
            assert!(parse_board(&tokens).is_err(), "{} cards should fail", n);
        }
    }

    #[test]
    fn card_lists_reject_duplicates() {
        let err = parse_cards("BSA RHA BSA BD2 RC3", 5, 7).unwrap_err();
        assert!(err.contains("Duplicate card: BSA"));
    }

    #[test]
    fn card_lists_enforce_count_range() {
        assert!(parse_cards("BSA RHA BD2 RC3", 5, 7).is_err());
        assert!(parse_cards("BSA RHA BD2 RC3 BS4 RH5 BD6 RC7", 5, 7).is_err());
        assert!(parse_cards("BSA RHA BD2 RC3 BS4", 5, 7).is_ok());
    }
}

//! Transcript parsing
//!
//! "anita ke 5 kapde" -> name "Anita ke", quantity 5. The first run of
//! digits is the quantity; what is left after dropping clothing words and
//! digits is the name. A digit run too large for `u32` saturates, so the
//! order is rejected downstream rather than recorded as a single item.

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

static QUANTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)kapd[aieou]|clothes|shirt|pant|saree|dupatta|\d+").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranscript {
    pub name: String,
    pub quantity: u32,
}

pub fn parse_transcript(text: &str) -> ParsedTranscript {
    let clean = text.trim().to_lowercase();

    let quantity = QUANTITY
        .find(&clean)
        .map(|m| digit_run_value(m.as_str()))
        .unwrap_or(1);

    let stripped = NOISE.replace_all(&clean, "");
    let words: Vec<&str> = stripped
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .collect();
    let name = if words.is_empty() {
        DEFAULT_CUSTOMER_NAME.to_string()
    } else {
        capitalize(&words.join(" "))
    };

    ParsedTranscript { name, quantity }
}

/// ASCII and Devanagari digits, saturating at `u32::MAX`
fn digit_run_value(run: &str) -> u32 {
    run.chars()
        .filter_map(digit_value)
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
}

fn digit_value(c: char) -> Option<u32> {
    c.to_digit(10).or_else(|| {
        ('\u{0966}'..='\u{096F}')
            .contains(&c)
            .then(|| c as u32 - 0x0966)
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (String, u32) {
        let p = parse_transcript(text);
        (p.name, p.quantity)
    }

    #[test]
    fn test_name_and_quantity() {
        assert_eq!(parse("Ravi 3"), ("Ravi".to_string(), 3));
        assert_eq!(parse("  5 kapde sharma ji  "), ("Sharma ji".to_string(), 5));
        assert_eq!(parse("Meena ke 2 saree"), ("Meena ke".to_string(), 2));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse("kapde"), ("Customer".to_string(), 1));
        assert_eq!(parse(""), ("Customer".to_string(), 1));
        assert_eq!(parse("mohan"), ("Mohan".to_string(), 1));
    }

    #[test]
    fn test_first_digit_run_wins() {
        assert_eq!(parse("12 shirt aur 3 pant gupta"), ("Aur gupta".to_string(), 12));
    }

    #[test]
    fn test_oversized_quantity_saturates() {
        assert_eq!(parse("Ravi 99999999999 kapde"), ("Ravi".to_string(), u32::MAX));
        assert_eq!(parse("Ravi 4294967295"), ("Ravi".to_string(), u32::MAX));
        assert_eq!(parse("Ravi 4294967294").1, 4_294_967_294);
    }

    #[test]
    fn test_devanagari_digits() {
        assert_eq!(parse("सुनीता ६ kapde"), ("सुनीता".to_string(), 6));
        assert_eq!(parse("गीता १२").1, 12);
    }

    #[test]
    fn test_single_letter_words_dropped() {
        assert_eq!(parse("a b rahul 4"), ("Rahul".to_string(), 4));
    }

    #[test]
    fn test_keyword_inside_word_is_removed() {
        // Matches the substring removal of the clothing keywords
        assert_eq!(parse("pantaloon 2"), ("Aloon".to_string(), 2));
    }

    #[test]
    fn test_devanagari_name() {
        let p = parse_transcript("सुनीता 6 kapde");
        assert_eq!(p.name, "सुनीता");
        assert_eq!(p.quantity, 6);
    }
}

//! "Missing letter" display badge: the first letter of the Latin alphabet
//! that does not occur in a customer's name.

/// Return the uppercase form of the first letter in `a..=z` absent from
/// `name`, or `'-'` when every letter occurs at least once.
///
/// Matching is ASCII-case-insensitive and locale-independent; accented or
/// non-Latin characters never count as any of the 26 letters. Total over
/// all inputs — the empty string yields `'A'`.
pub fn missing_letter(name: &str) -> char {
    let folded = name.to_lowercase();

    for letter in 'a'..='z' {
        if !folded.contains(letter) {
            return letter.to_ascii_uppercase();
        }
    }

    '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_gap_in_alphabetical_order() {
        assert_eq!(missing_letter("abcdefghijklmnopqrstuvwxy"), 'Z');
        assert_eq!(missing_letter("bcdefghijklmnopqrstuvwxyz"), 'A');
        assert_eq!(missing_letter("Ana Silva"), 'B');
    }

    #[test]
    fn full_pangram_yields_sentinel() {
        assert_eq!(missing_letter("abcdefghijklmnopqrstuvwxyz"), '-');
        assert_eq!(missing_letter("The quick brown fox jumps over the lazy dog"), '-');
    }

    #[test]
    fn empty_input_yields_a() {
        assert_eq!(missing_letter(""), 'A');
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(missing_letter("AbC"), missing_letter("abc"));
        assert_eq!(missing_letter("MARIA"), missing_letter("maria"));
    }

    #[test]
    fn punctuation_and_unicode_are_ignored() {
        assert_eq!(missing_letter("!!! ???"), 'A');
        // accented vowels do not count as their plain forms
        assert_eq!(missing_letter("José Ângelo"), 'A');
    }
}

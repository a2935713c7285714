/// A candidate word is accepted iff it contains at least one ASCII alphabetic
/// character. Digits, punctuation and whitespace are allowed around it, so
/// "word," and "it's" pass while "123" and "---" are rejected.
pub fn is_valid_word(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_are_valid() {
        assert!(is_valid_word("dog"));
        assert!(is_valid_word("Hello"));
    }

    #[test]
    fn mixed_content_counts_if_any_letter_present() {
        assert!(is_valid_word("it's"));
        assert!(is_valid_word("2nd"));
        assert!(is_valid_word("word,"));
    }

    #[test]
    fn no_alphabetic_character_is_invalid() {
        assert!(!is_valid_word("123"));
        assert!(!is_valid_word("---"));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("   "));
    }

    #[test]
    fn non_ascii_letters_alone_do_not_pass() {
        // The reference check is literally [a-zA-Z].
        assert!(!is_valid_word("日本語"));
        assert!(is_valid_word("日本語a"));
    }
}

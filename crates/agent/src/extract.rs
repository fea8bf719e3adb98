//! Entity extraction: the only structure ever pulled out of a message is a
//! numeric id or the free text trailing a keyword. Validation of what the
//! id refers to is the caller's job.

/// First maximal run of decimal digits anywhere in the message.
pub fn extract_id(message: &str) -> Option<String> {
    let start = message.find(|c: char| c.is_ascii_digit())?;
    let digits: String =
        message[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
    Some(digits)
}

/// Tokens after the first exact-token occurrence of `keyword`, rejoined
/// with single spaces. `None` when the keyword is absent or has nothing
/// after it.
pub fn term_after_keyword(message: &str, keyword: &str) -> Option<String> {
    let tokens: Vec<&str> = message.split_whitespace().collect();
    let position = tokens.iter().position(|token| *token == keyword)?;
    let rest = &tokens[position + 1..];
    if rest.is_empty() {
        return None;
    }
    Some(rest.join(" "))
}

#[cfg(test)]
mod tests {
    use super::{extract_id, term_after_keyword};

    #[test]
    fn first_digit_run_wins() {
        assert_eq!(extract_id("adicionar 12 carrinho 99"), Some("12".to_owned()));
        assert_eq!(extract_id("contratar plano 3"), Some("3".to_owned()));
        assert_eq!(extract_id("sem numero nenhum"), None);
    }

    #[test]
    fn digit_run_is_maximal() {
        assert_eq!(extract_id("id4711x"), Some("4711".to_owned()));
    }

    #[test]
    fn term_is_everything_after_the_keyword() {
        assert_eq!(
            term_after_keyword("buscar tenis de corrida", "buscar"),
            Some("tenis de corrida".to_owned())
        );
        assert_eq!(
            term_after_keyword("quero   buscar  fone   bluetooth", "buscar"),
            Some("fone bluetooth".to_owned())
        );
    }

    #[test]
    fn absent_or_trailing_keyword_yields_nothing() {
        assert_eq!(term_after_keyword("mostrar categoria", "buscar"), None);
        assert_eq!(term_after_keyword("quero buscar", "buscar"), None);
    }

    #[test]
    fn keyword_must_be_a_whole_token() {
        assert_eq!(term_after_keyword("rebuscar algo", "buscar"), None);
    }
}

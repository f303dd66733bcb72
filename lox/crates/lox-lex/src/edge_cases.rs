//! Edge case and property tests for lox-lex

#[cfg(test)]
mod tests {
    use crate::{keyword_from_ident, scan_all, Literal, Token, TokenKind};
    use lox_util::Handler;

    fn scan(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let tokens = scan_all(source, &mut handler);
        (tokens, handler)
    }

    fn eof_count(tokens: &[Token]) -> usize {
        tokens.iter().filter(|t| t.is_eof()).count()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_unterminated_string_only_eof() {
        let (tokens, handler) = scan("\"abc");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_at_sign_only_eof() {
        let (tokens, handler) = scan("@");
        assert_eq!(tokens, vec![Token::eof(1)]);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "Unexpected character.");
    }

    #[test]
    fn test_edge_lone_quote() {
        let (tokens, handler) = scan("\"");
        assert_eq!(tokens, vec![Token::eof(1)]);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_lone_slash() {
        let (tokens, _) = scan("/");
        assert_eq!(tokens[0].kind, TokenKind::Slash);
    }

    #[test]
    fn test_edge_nul_character() {
        let (tokens, handler) = scan("a\0b");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let (tokens, handler) = scan("a\r\nb\r\n");
        assert!(!handler.has_errors());
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2], Token::eof(3));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let (tokens, _) = scan(&format!("var {} = 1;", name));
        assert_eq!(tokens[1].lexeme, name);
    }

    #[test]
    fn test_edge_number_then_dot_then_ident() {
        let (tokens, _) = scan("123.foo");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].lexeme, "foo");
    }

    #[test]
    fn test_edge_many_lines() {
        let source = "\n".repeat(1000);
        let (tokens, _) = scan(&source);
        assert_eq!(tokens, vec![Token::eof(1001)]);
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_always_ends_in_single_eof() {
        use proptest::prelude::*;

        proptest!(|(input in any::<String>())| {
            let (tokens, _) = scan(&input);
            prop_assert!(tokens.last().map_or(false, |t| t.is_eof()));
            prop_assert_eq!(eof_count(&tokens), 1);
        });
    }

    #[test]
    fn test_property_clean_input_reports_nothing() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z0-9_ (){},.;+*/!=<>\t\r\n-]{0,200}")| {
            let (tokens, handler) = scan(&input);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(eof_count(&tokens), 1);
        });
    }

    #[test]
    fn test_property_lexemes_preserve_source_order() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 .\"/=!\n@#]{0,120}")| {
            let (tokens, _) = scan(&input);
            let mut position = 0;
            for token in tokens.iter().filter(|t| !t.is_eof()) {
                prop_assert!(!token.lexeme.is_empty());
                let found = input[position..].find(token.lexeme.as_str());
                prop_assert!(found.is_some(), "{:?} not found after {}", token.lexeme, position);
                position += found.unwrap_or(0) + token.lexeme.len();
            }
        });
    }

    #[test]
    fn test_property_identifier_or_keyword() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}")| {
            let (tokens, handler) = scan(&input);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(tokens.len(), 2);
            let expected = keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
            prop_assert_eq!(tokens[0].kind, expected);
            prop_assert_eq!(&tokens[0].lexeme, &input);
        });
    }

    #[test]
    fn test_property_numbers_decode() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,12}(\\.[0-9]{1,6})?")| {
            let (tokens, handler) = scan(&input);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Number);
            let expected: f64 = input.parse().unwrap();
            prop_assert_eq!(tokens[0].literal.clone(), Some(Literal::Number(expected)));
        });
    }

    #[test]
    fn test_property_string_contents_round_trip() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"]{0,80}")| {
            let source = format!("\"{}\"", body);
            let (tokens, handler) = scan(&source);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].literal.clone(), Some(Literal::String(body.clone())));
            let newlines = body.matches('\n').count() as u32;
            prop_assert_eq!(tokens[1].line, 1 + newlines);
        });
    }

    #[test]
    fn test_property_whitespace_is_ignored() {
        use proptest::prelude::*;

        proptest!(|(spaces in 0..100usize)| {
            let padding = " ".repeat(spaces);
            let source = format!("{}while{}", padding, padding);
            let (tokens, _) = scan(&source);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::While);
        });
    }
}

//! Edge case tests for mat-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexOptions, Lexer, Token};
    use mat_util::{DiagnosticCode, Handler};

    fn spaced() -> LexOptions {
        LexOptions::default().with_skip_whitespace(true)
    }

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        tokenize(source, &handler, spaced())
    }

    fn lex_lenient(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let options = spaced().with_strict_reporting(false);
        let tokens = tokenize(source, &handler, options);
        (tokens, handler)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n ").is_empty());
    }

    #[test]
    fn test_edge_whitespace_is_unexpected_by_default() {
        let handler = Handler::new();
        let t = tokenize("x y", &handler, LexOptions::default());
        assert_eq!(t, vec![Token::Variable('x'), Token::Fail]);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(
            handler.diagnostics()[0].message,
            "unexpected character ' '"
        );
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(400);
        let t = lex_all(&digits);
        assert_eq!(t.len(), 1);
        assert!(matches!(t[0], Token::Number(n) if n.is_infinite()));
    }

    #[test]
    fn test_edge_zero_forms() {
        assert_eq!(
            lex_all("0 0.0 .0 0e0"),
            vec![Token::Number(0.0); 4]
        );
    }

    #[test]
    fn test_edge_adjacent_numbers_and_letters() {
        assert_eq!(
            lex_all("2x3"),
            vec![Token::Number(2.0), Token::Variable('x'), Token::Number(3.0)]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("(([{}]))");
        assert_eq!(t.iter().filter(|x| **x == Token::OParen).count(), 2);
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn test_edge_unbalanced_is_not_checked() {
        assert_eq!(lex_all(")("), vec![Token::CParen, Token::OParen]);
    }

    #[test]
    fn test_edge_backslash_escapes_back_to_back() {
        assert_eq!(
            lex_all(r"\sin\cos\log\ln"),
            vec![Token::Sin, Token::Cos, Token::Log, Token::Ln]
        );
    }

    #[test]
    fn test_edge_latex_comparisons() {
        assert_eq!(
            lex_all(r"a \lt b \le c \neq d \ge e \gt f"),
            vec![
                Token::Variable('a'),
                Token::Less,
                Token::Variable('b'),
                Token::LessEqual,
                Token::Variable('c'),
                Token::NotEqual,
                Token::Variable('d'),
                Token::GreaterEqual,
                Token::E,
                Token::Greater,
                Token::Variable('f'),
            ]
        );
    }

    #[test]
    fn test_edge_sqrt_with_index() {
        assert_eq!(
            lex_all(r"\sqrt[3]{x}"),
            vec![
                Token::Sqrt,
                Token::OBracket,
                Token::Number(3.0),
                Token::CBracket,
                Token::OCurly,
                Token::Variable('x'),
                Token::CCurly,
            ]
        );
    }

    #[test]
    fn test_edge_function_token_at_end_of_call() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("h(", &handler, LexOptions::default());
        assert_eq!(lexer.collect_tokens(), vec![Token::Function('h'), Token::OParen]);
    }

    #[test]
    fn test_edge_lone_dot() {
        let (t, handler) = lex_lenient("x . y");
        assert_eq!(
            t,
            vec![Token::Variable('x'), Token::Fail, Token::Variable('y')]
        );
        assert!(handler.has_code(DiagnosticCode::W_LEX_UNEXPECTED_CHAR));
    }

    #[test]
    fn test_edge_dot_before_letter() {
        let (t, _) = lex_lenient(".x");
        assert_eq!(t, vec![Token::Fail, Token::Variable('x')]);
    }

    #[test]
    fn test_edge_multiline_buffer() {
        let t = lex_all("x = 1\ny = 2\n");
        assert_eq!(t.len(), 6);
    }

    #[test]
    fn test_edge_diagnostic_line_column_on_second_line() {
        let (_, handler) = lex_lenient("x\n  $");
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.span.start, 4);
        assert_eq!(diag.span.line, 2);
        assert_eq!(diag.span.column, 3);
        assert_eq!(diag.snippets[0].line, "  $");
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_invalid_chars_each_reported() {
        let (t, handler) = lex_lenient("@#$%");
        assert_eq!(t, vec![Token::Fail; 4]);
        assert_eq!(handler.warning_count(), 4);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_err_strict_stops_after_first() {
        let handler = Handler::new();
        let t = tokenize("@#$%", &handler, LexOptions::default());
        assert_eq!(t, vec![Token::Fail]);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let handler = Handler::new();
        let t = tokenize("x = # 1", &handler, spaced());
        assert_eq!(t, vec![Token::Variable('x'), Token::Equal, Token::Fail]);
        assert!(handler.has_errors());
    }

    #[test]
    fn test_err_unknown_escape_stops_even_when_lenient() {
        let (t, handler) = lex_lenient(r"x + \alpha + y");
        assert_eq!(t, vec![Token::Variable('x'), Token::Add]);
        assert!(handler.has_code(DiagnosticCode::W_LEX_UNKNOWN_ESCAPE));
    }

    #[test]
    fn test_err_uppercase_escape() {
        let (t, handler) = lex_lenient(r"\Sigma");
        assert!(t.is_empty());
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_err_control_char_message_is_escaped() {
        let handler = Handler::new();
        tokenize("\t", &handler, LexOptions::default());
        assert_eq!(handler.diagnostics()[0].message, "unexpected character '\\t'");
    }
}

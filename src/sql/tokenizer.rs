use crate::sql::{keyword::Keyword, token_kind::SqlKind};
use crate::token::{Highlighter, Token};

/// Operators in match order; two-byte forms come first so the longest wins.
const OPERATORS: [&str; 16] = [
    "==", "!=", "<=", ">=", "<>", "||", "&&", "=", "<", ">", "!", "+", "-", "*", "/", "%",
];

/// Display highlighter for free-form SQL.
///
/// Scope / Intent:
/// - Colours solutions for reading; never validates, recovers statement
///   structure or picks a dialect.
/// - Accepts any input, including unterminated strings and stray symbols.
///
/// Behavior:
/// - Scans left to right; at each position the first matching rule consumes
///   input: line comment, single-quoted string, number, word, operator, then a
///   one-character fallthrough.
/// - Comments start at the cursor (any column) and stop before the line
///   terminator.
/// - A string runs to the next raw `'`; backslashes are not escapes. Without a
///   closing quote the `'` falls through as punctuation.
/// - Numbers are unsigned decimals that must end on a word boundary.
/// - Whitespace is emitted one character per `Punctuation` token.
///
/// Guarantees:
/// - Never panics and never returns an error.
/// - Every token is non-empty and token texts concatenate back to `sql`.
///
/// Complexity:
/// - O(n) time apart from the string rule's quote search, O(t) space.
pub fn highlight_sql(sql: &str) -> Vec<Token<SqlKind>> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < sql.len() {
        let (kind, len) = scan(&sql[i..]);
        out.push(Token::new(kind, i, i + len));
        i += len;
    }

    out
}

/// Classify the token at the head of `rest` and return its byte length.
fn scan(rest: &str) -> (SqlKind, usize) {
    if let Some(len) = comment(rest) {
        return (SqlKind::Comment, len);
    }
    if let Some(len) = string(rest) {
        return (SqlKind::String, len);
    }
    let bytes = rest.as_bytes();
    if let Some(len) = number(bytes) {
        return (SqlKind::Number, len);
    }
    if let Some(len) = word(bytes) {
        let kind = Keyword::from_word(&rest[..len])
            .map(SqlKind::Keyword)
            .unwrap_or(SqlKind::Identifier);
        return (kind, len);
    }
    if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
        return (SqlKind::Operator, op.len());
    }

    // Fallthrough always makes progress by one scalar value.
    let len = rest.chars().next().map_or(1, char::len_utf8);
    (SqlKind::Punctuation, len)
}

fn comment(rest: &str) -> Option<usize> {
    if !(rest.starts_with("--") || rest.starts_with('#')) {
        return None;
    }
    let end = rest
        .find(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
        .unwrap_or(rest.len());
    Some(end)
}

fn string(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('\'')?;
    body.find('\'').map(|close| close + 2)
}

fn number(bytes: &[u8]) -> Option<usize> {
    let int = digits(bytes);
    if int == 0 {
        return None;
    }
    if bytes.get(int) == Some(&b'.') {
        let frac = digits(&bytes[int + 1..]);
        if frac > 0 && at_boundary(bytes, int + 1 + frac) {
            return Some(int + 1 + frac);
        }
    }
    at_boundary(bytes, int).then_some(int)
}

fn word(bytes: &[u8]) -> Option<usize> {
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {
            Some(1 + bytes[1..].iter().take_while(|b| is_word_byte(**b)).count())
        }
        _ => None,
    }
}

fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Word boundary after a word byte: end of input or a non-word byte follows.
fn at_boundary(bytes: &[u8], at: usize) -> bool {
    bytes.get(at).is_none_or(|b| !is_word_byte(*b))
}

/// [`highlight_sql`] as a [`Highlighter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlHighlighter;

impl Highlighter for SqlHighlighter {
    type Kind = SqlKind;
    const CONTAINER_CLASS: &'static str = "sql-code";

    fn highlight(source: &str) -> Vec<Token<SqlKind>> {
        highlight_sql(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::reconstruct;
    use proptest::prelude::*;
    use rstest::rstest;

    /// `(class, text)` pairs with whitespace punctuation dropped.
    fn significant(sql: &str) -> Vec<(String, &str)> {
        highlight_sql(sql)
            .into_iter()
            .filter(|t| !(t.kind == SqlKind::Punctuation && t.text(sql).trim().is_empty()))
            .map(|t| (t.kind.to_string(), t.text(sql)))
            .collect()
    }

    fn pairs<'a>(expected: &[(&str, &'a str)]) -> Vec<(String, &'a str)> {
        expected.iter().map(|(k, t)| (k.to_string(), *t)).collect()
    }

    #[test]
    fn keyword_versus_identifier() {
        let sql = "SELECT id FROM users WHERE age >= 18";
        assert_eq!(
            significant(sql),
            pairs(&[
                ("keyword", "SELECT"),
                ("identifier", "id"),
                ("keyword", "FROM"),
                ("identifier", "users"),
                ("keyword", "WHERE"),
                ("identifier", "age"),
                ("operator", ">="),
                ("number", "18"),
            ])
        );
    }

    #[test]
    fn comment_stops_at_end_of_line() {
        let sql = "SELECT 1 -- note\nFROM t";
        let toks = highlight_sql(sql);
        let comment = toks.iter().find(|t| t.kind == SqlKind::Comment).unwrap();
        assert_eq!(comment.text(sql), "-- note");

        let newline = toks.iter().find(|t| t.text(sql) == "\n").unwrap();
        assert_eq!(newline.kind, SqlKind::Punctuation);
        assert!(toks.iter().any(|t| t.kind.is_keyword(Keyword::From)));
    }

    #[test]
    fn unclosed_string_does_not_consume_rest() {
        let sql = "WHERE name = 'unterminated";
        let toks = highlight_sql(sql);
        let quote = toks.iter().find(|t| t.text(sql) == "'").unwrap();
        assert_eq!(quote.kind, SqlKind::Punctuation);
        let word = toks.iter().find(|t| t.text(sql) == "unterminated").unwrap();
        assert_eq!(word.kind, SqlKind::Identifier);
        assert_eq!(reconstruct(sql, &toks), sql);
    }

    #[rstest]
    #[case("x -- trailing", &[("identifier", "x"), ("comment", "-- trailing")])]
    #[case("# hash comment", &[("comment", "# hash comment")])]
    #[case("a#b\nc", &[("identifier", "a"), ("comment", "#b"), ("identifier", "c")])]
    #[case("--\r\nx", &[("comment", "--"), ("identifier", "x")])]
    #[case("'it\\'s'", &[("string", "'it\\'"), ("identifier", "s"), ("punctuation", "'")])]
    #[case("''", &[("string", "''")])]
    #[case("'a -- b'", &[("string", "'a -- b'")])]
    #[case("3.14", &[("number", "3.14")])]
    #[case("-5", &[("operator", "-"), ("number", "5")])]
    #[case("1.5x", &[("number", "1"), ("punctuation", "."), ("punctuation", "5"), ("identifier", "x")])]
    #[case("18abc", &[("punctuation", "1"), ("punctuation", "8"), ("identifier", "abc")])]
    #[case("t.col", &[("identifier", "t"), ("punctuation", "."), ("identifier", "col")])]
    #[case("a<>b", &[("identifier", "a"), ("operator", "<>"), ("identifier", "b")])]
    #[case("a||b&&c", &[("identifier", "a"), ("operator", "||"), ("identifier", "b"), ("operator", "&&"), ("identifier", "c")])]
    #[case("a==!b", &[("identifier", "a"), ("operator", "=="), ("operator", "!"), ("identifier", "b")])]
    #[case("COUNT(*)", &[("keyword", "COUNT"), ("punctuation", "("), ("operator", "*"), ("punctuation", ")")])]
    #[case("row_number() over", &[("keyword", "row_number"), ("punctuation", "("), ("punctuation", ")"), ("keyword", "over")])]
    #[case("_tmp1", &[("identifier", "_tmp1")])]
    #[case("café", &[("identifier", "caf"), ("punctuation", "é")])]
    fn classifies(#[case] sql: &str, #[case] expected: &[(&str, &str)]) {
        assert_eq!(significant(sql), pairs(expected));
    }

    #[test]
    fn whitespace_is_one_token_per_character() {
        let sql = "a \t\n b";
        let toks = highlight_sql(sql);
        let texts: Vec<_> = toks.iter().map(|t| t.text(sql)).collect();
        assert_eq!(texts, ["a", " ", "\t", "\n", " ", "b"]);
        assert!(toks[1..5].iter().all(|t| t.kind == SqlKind::Punctuation));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(highlight_sql("").is_empty());
    }

    #[test]
    fn highlighter_trait_delegates() {
        let sql = "SELECT 1";
        assert_eq!(SqlHighlighter::highlight(sql), highlight_sql(sql));
        assert_eq!(SqlHighlighter::CONTAINER_CLASS, "sql-code");
    }

    proptest! {
        #[test]
        fn reconstruction_is_lossless(sql in any::<String>()) {
            let toks = highlight_sql(&sql);
            prop_assert_eq!(reconstruct(&sql, &toks), sql);
        }

        #[test]
        fn every_token_makes_progress(sql in "\\PC{1,64}") {
            let toks = highlight_sql(&sql);
            prop_assert!(!toks.is_empty());
            prop_assert!(toks.iter().all(|t| !t.is_empty()));
            prop_assert!(toks.windows(2).all(|w| w[0].end == w[1].start));
        }

        #[test]
        fn sql_shaped_input_is_lossless(
            sql in "[A-Za-z0-9_ '\\-#.<>=!|&*/%()\\n\\t,;]{0,96}"
        ) {
            let toks = highlight_sql(&sql);
            prop_assert_eq!(reconstruct(&sql, &toks), sql.clone());
            prop_assert_eq!(highlight_sql(&sql), toks);
        }

        #[test]
        fn keyword_iff_in_vocabulary(word in "[A-Za-z_][A-Za-z0-9_]{0,15}") {
            let sql = format!(" {word} ");
            let toks = highlight_sql(&sql);
            prop_assert_eq!(toks.len(), 3);
            let upper = word.to_ascii_uppercase();
            let listed = Keyword::ALL.iter().any(|k| k.as_str() == upper);
            prop_assert_eq!(matches!(toks[1].kind, SqlKind::Keyword(_)), listed);
            prop_assert_eq!(toks[1].kind == SqlKind::Identifier, !listed);
        }
    }
}

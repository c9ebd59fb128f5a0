//! Reserved-word vocabulary recognized by the SQL highlighter.
//!
//! The set is closed: a word is highlighted as a keyword if and only if its
//! ASCII upper-case form appears below. It mixes DML/DDL verbs, join
//! modifiers, aggregates, window functions, set operators, CTE keywords, type
//! names and a handful of stored-procedure terms, because the practice
//! solutions use all of them. It is not tied to any one dialect.
//!
//! Matching is case-insensitive via [`Keyword::from_word`]; [`Keyword::as_str`]
//! gives the canonical upper-case spelling.

macro_rules! keywords {
    ($($variant:ident => $text:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $($variant),+
        }

        impl Keyword {
            /// Every keyword, in vocabulary order.
            pub const ALL: &'static [Self] = &[$(Keyword::$variant),+];

            /// Classify an *upper-cased* word. Returns `None` for anything outside
            /// the vocabulary.
            pub fn from_upper(word: &str) -> Option<Self> {
                match word {
                    $($text => Some(Keyword::$variant),)+
                    _ => None,
                }
            }

            /// Canonical upper-case spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text),+
                }
            }
        }
    };
}

keywords! {
    Select => "SELECT",
    From => "FROM",
    Where => "WHERE",
    Join => "JOIN",
    Left => "LEFT",
    Right => "RIGHT",
    Inner => "INNER",
    Outer => "OUTER",
    Full => "FULL",
    Cross => "CROSS",
    On => "ON",
    And => "AND",
    Or => "OR",
    Not => "NOT",
    In => "IN",
    Exists => "EXISTS",
    Between => "BETWEEN",
    Like => "LIKE",
    Is => "IS",
    Null => "NULL",
    As => "AS",
    Distinct => "DISTINCT",
    All => "ALL",
    Top => "TOP",
    Limit => "LIMIT",
    Offset => "OFFSET",
    Order => "ORDER",
    By => "BY",
    Asc => "ASC",
    Desc => "DESC",
    Group => "GROUP",
    Having => "HAVING",
    Union => "UNION",
    Intersect => "INTERSECT",
    Except => "EXCEPT",
    Case => "CASE",
    When => "WHEN",
    Then => "THEN",
    Else => "ELSE",
    End => "END",
    Insert => "INSERT",
    Into => "INTO",
    Values => "VALUES",
    Update => "UPDATE",
    Set => "SET",
    Delete => "DELETE",
    Create => "CREATE",
    Alter => "ALTER",
    Drop => "DROP",
    Table => "TABLE",
    Index => "INDEX",
    View => "VIEW",
    Database => "DATABASE",
    Schema => "SCHEMA",
    Primary => "PRIMARY",
    Key => "KEY",
    Foreign => "FOREIGN",
    References => "REFERENCES",
    Constraint => "CONSTRAINT",
    Default => "DEFAULT",
    Check => "CHECK",
    Unique => "UNIQUE",
    AutoIncrement => "AUTO_INCREMENT",
    If => "IF",
    Begin => "BEGIN",
    Return => "RETURN",
    With => "WITH",
    Recursive => "RECURSIVE",
    Over => "OVER",
    Partition => "PARTITION",
    RowNumber => "ROW_NUMBER",
    Rank => "RANK",
    DenseRank => "DENSE_RANK",
    Ntile => "NTILE",
    Lag => "LAG",
    Lead => "LEAD",
    FirstValue => "FIRST_VALUE",
    LastValue => "LAST_VALUE",
    Sum => "SUM",
    Count => "COUNT",
    Avg => "AVG",
    Min => "MIN",
    Max => "MAX",
    Coalesce => "COALESCE",
    NullIf => "NULLIF",
    Cast => "CAST",
    Convert => "CONVERT",
    Extract => "EXTRACT",
    Epoch => "EPOCH",
    Interval => "INTERVAL",
    Int => "INT",
    Integer => "INTEGER",
    VarChar => "VARCHAR",
    Char => "CHAR",
    Text => "TEXT",
    Date => "DATE",
    DateTime => "DATETIME",
    Timestamp => "TIMESTAMP",
    Boolean => "BOOLEAN",
    Declare => "DECLARE",
    Function => "FUNCTION",
    Procedure => "PROCEDURE",
    Returns => "RETURNS",
    Trigger => "TRIGGER",
    Cursor => "CURSOR",
    Fetch => "FETCH",
    Close => "CLOSE",
}

impl Keyword {
    /// Longest spelling in the vocabulary (`AUTO_INCREMENT`).
    const MAX_LEN: usize = 14;

    /// Classify a word of any case.
    pub fn from_word(word: &str) -> Option<Self> {
        if word.len() > Self::MAX_LEN {
            return None;
        }
        Self::from_upper(&word.to_ascii_uppercase())
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column types recognized inside ASCII-art table definitions.
///
/// Only bare lowercase names count: `varchar(255)` or `int unsigned` stay
/// ordinary column text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Int,
    Varchar,
    Char,
    Text,
    Date,
    Datetime,
    Timestamp,
    Boolean,
    Decimal,
    Float,
    Double,
    Bigint,
    Smallint,
    Tinyint,
    Enum,
}

impl SchemaType {
    pub const ALL: [Self; 15] = [
        SchemaType::Int,
        SchemaType::Varchar,
        SchemaType::Char,
        SchemaType::Text,
        SchemaType::Date,
        SchemaType::Datetime,
        SchemaType::Timestamp,
        SchemaType::Boolean,
        SchemaType::Decimal,
        SchemaType::Float,
        SchemaType::Double,
        SchemaType::Bigint,
        SchemaType::Smallint,
        SchemaType::Tinyint,
        SchemaType::Enum,
    ];

    /// Classify an already trimmed and lower-cased cell.
    pub fn from_lower(cell: &str) -> Option<Self> {
        use SchemaType::*;
        let ty = match cell {
            "int" => Int,
            "varchar" => Varchar,
            "char" => Char,
            "text" => Text,
            "date" => Date,
            "datetime" => Datetime,
            "timestamp" => Timestamp,
            "boolean" => Boolean,
            "decimal" => Decimal,
            "float" => Float,
            "double" => Double,
            "bigint" => Bigint,
            "smallint" => Smallint,
            "tinyint" => Tinyint,
            "enum" => Enum,
            _ => return None,
        };
        Some(ty)
    }

    pub const fn as_str(self) -> &'static str {
        use SchemaType::*;
        match self {
            Int => "int",
            Varchar => "varchar",
            Char => "char",
            Text => "text",
            Date => "date",
            Datetime => "datetime",
            Timestamp => "timestamp",
            Boolean => "boolean",
            Decimal => "decimal",
            Float => "float",
            Double => "double",
            Bigint => "bigint",
            Smallint => "smallint",
            Tinyint => "tinyint",
            Enum => "enum",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

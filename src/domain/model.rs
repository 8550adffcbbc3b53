use std::fmt;

/// One CSV record, fields kept as plain strings.
pub type Row = Vec<String>;

/// Output columns, in the order YNAB expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    Date,
    Payee,
    Memo,
    Amount,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 4] = [
        CanonicalField::Date,
        CanonicalField::Payee,
        CanonicalField::Memo,
        CanonicalField::Amount,
    ];

    /// Header written to the output file.
    pub fn canonical_name(self) -> &'static str {
        match self {
            CanonicalField::Date => "Date",
            CanonicalField::Payee => "Payee",
            CanonicalField::Memo => "Memo",
            CanonicalField::Amount => "Amount",
        }
    }

    /// Header expected in the bank export.
    pub fn source_name(self) -> &'static str {
        match self {
            CanonicalField::Date => "Datum",
            CanonicalField::Payee => "Naam tegenpartij",
            CanonicalField::Memo => "Omschrijving-1",
            CanonicalField::Amount => "Bedrag",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Column position of every canonical field in the source header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndexMap {
    indices: [usize; 4],
}

impl ColumnIndexMap {
    pub(crate) fn from_indices(indices: [usize; 4]) -> Self {
        Self { indices }
    }

    pub fn index_of(&self, field: CanonicalField) -> usize {
        self.indices[field.position()]
    }

    pub fn max_index(&self) -> usize {
        self.indices.iter().copied().max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, usize)> + '_ {
        CanonicalField::ALL
            .iter()
            .map(move |field| (*field, self.index_of(*field)))
    }
}

/// Whole CSV file in memory; row 0 is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Data rows, header excluded.
    pub fn records(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

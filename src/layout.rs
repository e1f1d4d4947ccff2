//! Fixed SPED layout knowledge: blocks, their sentinel records, the header
//! field positions and where each document record keeps its business date.

use rustc_hash::FxHashMap;
use std::fmt;

/// Record type of the file header
pub const HEADER_RECORD: &str = "0000";

/// Header field holding the period start (`DT_INI`)
pub const HEADER_START_FIELD: usize = 4;

/// Header field holding the period end (`DT_FIN`)
pub const HEADER_END_FIELD: usize = 5;

/// Document records of blocks C and D and the split index of the date used
/// to decide whether the document belongs to the filtered period.
pub const DOCUMENT_DATE_FIELDS: [(&str, usize); 14] = [
    ("C100", 11), // DT_E_S
    ("C300", 4),
    ("C350", 10),
    ("C405", 2),
    ("C500", 12),
    ("C600", 11),
    ("C700", 11),
    ("D100", 12), // DT_A_P
    ("D300", 4),
    ("D350", 10),
    ("D400", 5),
    ("D500", 11),
    ("D600", 11),
    ("D700", 10),
];

/// Top-level section of a SPED file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Block 0: opening, identification and reference tables
    Identification,
    /// Block C: goods documents (ICMS/IPI)
    Goods,
    /// Block D: service documents (ICMS)
    Services,
    /// Block E: tax assessment
    Assessment,
    /// Block G: CIAP credit control
    Ciap,
    /// Block H: inventory
    Inventory,
    /// Block K: production and stock control
    Production,
    /// Block 1: complementary information
    Complementary,
    /// Block 9: control and file closing
    Control,
}

impl Block {
    /// Block opened by a record type, if it is an opener
    pub fn opened_by(record_type: &str) -> Option<Block> {
        match record_type {
            "0001" => Some(Block::Identification),
            "C001" => Some(Block::Goods),
            "D001" => Some(Block::Services),
            "E001" => Some(Block::Assessment),
            "G001" => Some(Block::Ciap),
            "H001" => Some(Block::Inventory),
            "K001" => Some(Block::Production),
            "1001" => Some(Block::Complementary),
            "9001" => Some(Block::Control),
            _ => None,
        }
    }

    /// Block closed by a record type, if it is a closer
    pub fn closed_by(record_type: &str) -> Option<Block> {
        match record_type {
            "0990" => Some(Block::Identification),
            "C990" => Some(Block::Goods),
            "D990" => Some(Block::Services),
            "E990" => Some(Block::Assessment),
            "G990" => Some(Block::Ciap),
            "H990" => Some(Block::Inventory),
            "K990" => Some(Block::Production),
            "1990" => Some(Block::Complementary),
            "9990" => Some(Block::Control),
            _ => None,
        }
    }

    /// True for opener and closer records of any block
    #[inline]
    pub fn is_sentinel(record_type: &str) -> bool {
        Self::opened_by(record_type).is_some() || Self::closed_by(record_type).is_some()
    }

    pub fn letter(self) -> char {
        match self {
            Block::Identification => '0',
            Block::Goods => 'C',
            Block::Services => 'D',
            Block::Assessment => 'E',
            Block::Ciap => 'G',
            Block::Inventory => 'H',
            Block::Production => 'K',
            Block::Complementary => '1',
            Block::Control => '9',
        }
    }

    /// Blocks whose documents are kept or dropped by date
    #[inline]
    pub fn is_date_filtered(self) -> bool {
        matches!(self, Block::Goods | Block::Services)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Lookup from document record type to its date field index
#[derive(Debug, Clone)]
pub struct DateRules {
    positions: FxHashMap<&'static str, usize>,
}

impl DateRules {
    /// The standard EFD ICMS/IPI document table
    pub fn standard() -> Self {
        DateRules {
            positions: DOCUMENT_DATE_FIELDS.iter().copied().collect(),
        }
    }

    /// Date field index for a document record, `None` for any other record
    #[inline]
    pub fn date_field(&self, record_type: &str) -> Option<usize> {
        self.positions.get(record_type).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for DateRules {
    fn default() -> Self {
        Self::standard()
    }
}

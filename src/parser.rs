/// Field delimiter of every SPED record
pub const DELIMITER: char = '|';

/// Shortest line that can still hold `|REG|x|`
const MIN_RECORD_LEN: usize = 7;

/// A single well-formed SPED line split into its fields
///
/// The format is:
/// ```text
/// |REG|FIELD_2|FIELD_3|...|
/// ```
///
/// Field indexes follow the split of the trimmed line, so index 0 is the
/// empty segment before the leading delimiter and index 1 is the record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Tokenize a physical line, returning `None` for anything that is not a
    /// SPED record (missing delimiters, too short, too few segments)
    pub fn parse(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.len() < MIN_RECORD_LEN
            || !trimmed.starts_with(DELIMITER)
            || !trimmed.ends_with(DELIMITER)
        {
            return None;
        }

        let fields: Vec<&'a str> = trimmed.split(DELIMITER).collect();
        if fields.len() < 3 {
            return None;
        }

        Some(Record { fields })
    }

    /// Record type code, e.g. `C100`
    #[inline]
    pub fn record_type(&self) -> &'a str {
        self.fields.get(1).copied().unwrap_or_default()
    }

    /// Field at a split index, if the line is long enough
    #[inline]
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Number of split segments, including the two empty edge segments
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Rebuild the line with some fields replaced.
    ///
    /// Returns `None` when any index is past the end of the record; the
    /// result carries no line terminator.
    pub fn with_fields(&self, replacements: &[(usize, &str)]) -> Option<String> {
        let mut fields: Vec<&str> = self.fields.clone();
        for &(index, value) in replacements {
            *fields.get_mut(index)? = value;
        }
        Some(fields.join("|"))
    }
}

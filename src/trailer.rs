//! Regeneration of block 9, the per-record-type line census that closes
//! every SPED file.
//!
//! The arithmetic is the one downstream tooling has always received from
//! this filter: the `9900` population is the number of distinct record types
//! plus three, and `9990` carries the number of `9900` lines plus three.

use rustc_hash::FxHashMap;

const CONTROL_OPENER: &str = "9001";
const CENSUS_RECORD: &str = "9900";
const CONTROL_CLOSER: &str = "9990";
const FILE_TERMINATOR: &str = "9999";

/// Number of lines written per record type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCounts {
    counts: FxHashMap<String, u64>,
}

impl RecordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment(&mut self, record_type: &str) {
        match self.counts.get_mut(record_type) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(record_type.to_string(), 1);
            }
        }
    }

    pub fn get(&self, record_type: &str) -> u64 {
        self.counts.get(record_type).copied().unwrap_or(0)
    }

    /// Number of distinct record types
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts in ascending record type order
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(record_type, &count)| (record_type.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    fn set(&mut self, record_type: &str, count: u64) {
        self.counts.insert(record_type.to_string(), count);
    }
}

/// Build the replacement block 9.
///
/// `lines_written` is the number of lines already in the output. The counts
/// are updated with the block's own records. Returned lines carry no line
/// terminator; the last one is the `9999` record whose value equals
/// `lines_written` plus every returned line.
pub fn summary_block(counts: &mut RecordCounts, lines_written: u64) -> Vec<String> {
    let mut lines = Vec::with_capacity(counts.len() + 4);

    counts.increment(CONTROL_OPENER);
    lines.push(format!("|{CONTROL_OPENER}|0|"));

    let population = counts.len() as u64 + 3;
    counts.set(CENSUS_RECORD, population);
    counts.increment(CONTROL_CLOSER);
    counts.increment(FILE_TERMINATOR);

    let mut census_lines = 0u64;
    for (record_type, count) in counts.sorted() {
        if record_type == CONTROL_CLOSER || record_type == FILE_TERMINATOR {
            continue;
        }
        lines.push(format!("|{CENSUS_RECORD}|{record_type}|{count}|"));
        census_lines += 1;
    }

    lines.push(format!("|{CONTROL_CLOSER}|{}|", census_lines + 3));

    // The terminator counts itself
    let total = lines_written + lines.len() as u64 + 1;
    lines.push(format!("|{FILE_TERMINATOR}|{total}|"));

    lines
}

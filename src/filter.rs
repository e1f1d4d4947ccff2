use crate::checksum::{ChecksumWriter, DigestAlgorithm};
use crate::date::{format_sped_date, parse_sped_date, DateRange};
use crate::encoding::TextEncoding;
use crate::error::FilterError;
use crate::layout::{
    Block, DateRules, DOCUMENT_DATE_FIELDS, HEADER_END_FIELD, HEADER_RECORD, HEADER_START_FIELD,
};
use crate::parser::Record;
use crate::progress::{count_lines, ProgressReporter, DEFAULT_PROGRESS_INTERVAL};
use crate::trailer::{summary_block, RecordCounts};
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use std::any::Any;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Settings of a filter instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Encoding of both input and output
    pub encoding: TextEncoding,
    /// Lines between progress reports; 0 disables them
    pub progress_interval: u64,
    /// Optional checksum of the written file
    pub digest: Option<DigestAlgorithm>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            encoding: TextEncoding::latin1(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            digest: None,
        }
    }
}

/// Outcome of a completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Physical lines read, malformed ones included
    pub lines_read: u64,
    /// Lines in the output, trailer included
    pub lines_written: u64,
    /// Lines skipped because they are not SPED records
    pub malformed_lines: u64,
    /// Lines where undecodable bytes were substituted
    pub lines_with_decode_errors: u64,
    /// Block C/D document records dated inside the range
    pub documents_kept: u64,
    /// Block C/D document records dropped for a date outside the range,
    /// a missing date or an unparseable one
    pub documents_discarded: u64,
    /// Lines written per record type, block 9 included
    pub record_counts: RecordCounts,
    /// Hex checksum of the output, when requested
    pub digest: Option<String>,
}

impl FilterReport {
    /// Human-readable summary for the caller
    pub fn summary(&self) -> String {
        format!(
            "SPED date filter completed successfully!\n\n\
             Lines read: {}\n\
             Lines written: {}\n\n\
             INFO: Record 0000 dates updated.\n\
             INFO: Block 9 counts recalculated.\n\n\
             WARNING: Block E apuração NOT recalculated.\n\
             File intended for ANALYSIS or movement import.",
            self.lines_read, self.lines_written
        )
    }
}

/// What to do with one well-formed record
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineAction {
    /// Copy the line as read
    Keep,
    /// Write this text instead
    Rewrite(String),
    Drop,
}

/// Scan state of one pass: which block we are in and whether the last
/// document record was kept
struct BlockTracker<'r> {
    rules: &'r DateRules,
    range: DateRange,
    current: Option<Block>,
    keep_document: bool,
    header_pending: bool,
    documents_kept: u64,
    documents_discarded: u64,
}

impl<'r> BlockTracker<'r> {
    fn new(rules: &'r DateRules, range: DateRange) -> Self {
        BlockTracker {
            rules,
            range,
            current: None,
            keep_document: false,
            header_pending: true,
            documents_kept: 0,
            documents_discarded: 0,
        }
    }

    fn classify(&mut self, record: &Record<'_>, line_number: u64) -> LineAction {
        let record_type = record.record_type();

        if self.header_pending {
            self.header_pending = false;
            if record_type == HEADER_RECORD {
                self.current = Some(Block::Identification);
                return self.rewrite_header(record);
            }
        }

        if let Some(block) = Block::opened_by(record_type) {
            debug!("Entering block {}", block);
            self.current = Some(block);
        }

        match self.current {
            // Block 9 is regenerated after the pass
            Some(Block::Control) => LineAction::Drop,
            Some(block) if block.is_date_filtered() => {
                if self.filtered_block_keeps(record, line_number) {
                    LineAction::Keep
                } else {
                    LineAction::Drop
                }
            }
            _ => LineAction::Keep,
        }
    }

    fn rewrite_header(&self, record: &Record<'_>) -> LineAction {
        let start = format_sped_date(self.range.start());
        let end = format_sped_date(self.range.end());

        match record.with_fields(&[
            (HEADER_START_FIELD, start.as_str()),
            (HEADER_END_FIELD, end.as_str()),
        ]) {
            Some(rewritten) => {
                info!("Record 0000 updated with period {} to {}", start, end);
                LineAction::Rewrite(rewritten)
            }
            None => {
                error!("Record 0000 has too few fields for the period dates, keeping original");
                LineAction::Keep
            }
        }
    }

    fn filtered_block_keeps(&mut self, record: &Record<'_>, line_number: u64) -> bool {
        let record_type = record.record_type();

        if let Some(index) = self.rules.date_field(record_type) {
            let date = match record.field(index).filter(|raw| !raw.is_empty()) {
                Some(raw) => parse_sped_date(raw),
                None => {
                    warn!(
                        "Record {} (line {}): date field {} is empty or missing, document discarded",
                        record_type, line_number, index
                    );
                    None
                }
            };

            self.keep_document = self.document_in_range(record_type, date);
            if self.keep_document {
                self.documents_kept += 1;
            } else {
                self.documents_discarded += 1;
            }
            self.keep_document
        } else if Block::is_sentinel(record_type) {
            self.keep_document = false;
            true
        } else {
            self.keep_document
        }
    }

    fn document_in_range(&self, record_type: &str, date: Option<NaiveDate>) -> bool {
        match date {
            Some(date) if self.range.contains(date) => {
                debug!("Record {} kept (date {})", record_type, date);
                true
            }
            Some(date) => {
                debug!(
                    "Record {} discarded (date {} outside {})",
                    record_type, date, self.range
                );
                false
            }
            None => false,
        }
    }
}

/// Streaming date filter for SPED files
///
/// Holds only immutable settings, so one instance can serve concurrent runs
/// on different files.
#[derive(Debug, Clone, Default)]
pub struct SpedDateFilter {
    options: FilterOptions,
    rules: DateRules,
}

impl SpedDateFilter {
    pub fn new(options: FilterOptions) -> Self {
        SpedDateFilter {
            options,
            rules: DateRules::standard(),
        }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Filter a file, reporting the outcome as `(success, message)`.
    ///
    /// Never panics: errors and panics inside the pass (the callback
    /// included) become a failed result.
    pub fn filter(
        &self,
        input_path: &Path,
        output_path: &Path,
        range: DateRange,
        progress: Option<&mut dyn FnMut(u8)>,
    ) -> (bool, String) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(move || {
            self.run(input_path, output_path, range, progress)
        }))
        .unwrap_or_else(|payload| Err(FilterError::Unexpected(panic_message(payload.as_ref()))));

        match outcome {
            Ok(report) => (true, report.summary()),
            Err(err) => {
                error!("Date filter failed: {}", err);
                (false, format!("Error: {}", err))
            }
        }
    }

    /// Filter a file, returning the typed report.
    ///
    /// The output file is only created once the input is known to exist
    /// and to be a different file.
    pub fn run(
        &self,
        input_path: &Path,
        output_path: &Path,
        range: DateRange,
        progress: Option<&mut dyn FnMut(u8)>,
    ) -> Result<FilterReport, FilterError> {
        info!("Starting date filter for period {}", range);
        info!(
            "Input: {}, output: {}, encoding: {}",
            input_path.display(),
            output_path.display(),
            self.options.encoding
        );
        debug!("Document date fields: {:?}", DOCUMENT_DATE_FIELDS);

        if !input_path.exists() {
            return Err(FilterError::InputNotFound(input_path.to_path_buf()));
        }
        if is_same_file(input_path, output_path)? {
            return Err(FilterError::OutputIsInput(output_path.to_path_buf()));
        }

        let total_lines = match progress {
            Some(_) => {
                info!("Counting lines for progress reporting...");
                match count_lines(input_path) {
                    Ok(total) => {
                        info!("Estimated total lines: {}", total);
                        Some(total)
                    }
                    Err(err) => {
                        warn!("Could not count lines ({}), progress will not be accurate", err);
                        None
                    }
                }
            }
            None => None,
        };
        let mut reporter =
            ProgressReporter::new(progress, total_lines, self.options.progress_interval);

        let input = File::open(input_path)?;
        let mut output = BufWriter::new(File::create(output_path)?);
        let report = self.filter_stream(input, &mut output, range, &mut reporter)?;
        output.flush()?;

        reporter.finish();
        info!(
            "Date filter finished: {} lines read, {} lines written",
            report.lines_read, report.lines_written
        );
        Ok(report)
    }

    /// Stream and filter any reader into any writer.
    ///
    /// This function:
    /// - Reads input line by line, retaining only the current line
    /// - Rewrites the header period and tracks the current block
    /// - Keeps block C and D documents dated inside `range`, with their children
    /// - Drops the input's block 9 and appends a regenerated one
    /// - Optionally computes a checksum of everything written
    ///
    /// `progress.finish()` is left to the caller.
    pub fn filter_stream<R: Read, W: Write>(
        &self,
        input: R,
        output: &mut W,
        range: DateRange,
        progress: &mut ProgressReporter<'_>,
    ) -> Result<FilterReport, FilterError> {
        let mut reader = BufReader::new(input);

        match self.options.digest {
            Some(algorithm) => {
                let mut writer = ChecksumWriter::new(output, algorithm);
                let mut report = self.process(&mut reader, &mut writer, range, progress)?;
                let bytes = writer.bytes_written();
                let (_, checksum) = writer.into_parts();
                info!("{} of {} output bytes: {}", algorithm.name(), bytes, checksum);
                report.digest = Some(checksum);
                Ok(report)
            }
            None => self.process(&mut reader, output, range, progress),
        }
    }

    fn process<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        output: &mut W,
        range: DateRange,
        progress: &mut ProgressReporter<'_>,
    ) -> Result<FilterReport, FilterError> {
        let encoding = self.options.encoding;
        let mut tracker = BlockTracker::new(&self.rules, range);
        let mut report = FilterReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf)?;
            if n == 0 {
                break; // EOF
            }

            report.lines_read += 1;
            progress.on_line(report.lines_read);

            let (line, had_errors) = encoding.decode(&buf);
            if had_errors {
                report.lines_with_decode_errors += 1;
            }

            let Some(record) = Record::parse(&line) else {
                report.malformed_lines += 1;
                continue;
            };

            match tracker.classify(&record, report.lines_read) {
                LineAction::Keep => write_line(output, &line, encoding)?,
                LineAction::Rewrite(text) => write_line(output, &text, encoding)?,
                LineAction::Drop => continue,
            }
            report.lines_written += 1;
            report.record_counts.increment(record.record_type());
        }

        info!("Rebuilding block 9...");
        for line in summary_block(&mut report.record_counts, report.lines_written) {
            write_line(output, &line, encoding)?;
            report.lines_written += 1;
        }

        report.documents_kept = tracker.documents_kept;
        report.documents_discarded = tracker.documents_discarded;
        Ok(report)
    }
}

/// Write a line in the file's encoding, adding `\n` when it has no terminator
#[inline]
fn write_line<W: Write>(output: &mut W, line: &str, encoding: TextEncoding) -> std::io::Result<()> {
    output.write_all(&encoding.encode(line))?;
    if !line.ends_with('\n') {
        output.write_all(b"\n")?;
    }
    Ok(())
}

/// True when `output_path` already resolves to `input_path`
fn is_same_file(input_path: &Path, output_path: &Path) -> std::io::Result<bool> {
    match fs::canonicalize(output_path) {
        Ok(output) => Ok(fs::canonicalize(input_path)? == output),
        Err(_) => Ok(false),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during filtering".to_string()
    }
}

/// Filter `input_path` into `output_path`, keeping documents dated between
/// `start_date` and `end_date` inclusive.
///
/// `encoding` is a label such as `latin1` or `utf-8`. Returns
/// `(success, message)`; the message is the run summary or the error.
pub fn filter_sped_by_date(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    encoding: &str,
    progress: Option<&mut dyn FnMut(u8)>,
) -> (bool, String) {
    let encoding = match TextEncoding::for_label(encoding) {
        Ok(encoding) => encoding,
        Err(err) => {
            error!("Date filter failed: {}", err);
            return (false, format!("Error: {}", err));
        }
    };

    let filter = SpedDateFilter::new(FilterOptions {
        encoding,
        ..FilterOptions::default()
    });
    filter.filter(
        input_path.as_ref(),
        output_path.as_ref(),
        DateRange::new(start_date, end_date),
        progress,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn january() -> DateRange {
        DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 31))
    }

    /// C100 with DT_DOC at index 10 and DT_E_S (the filtered date) at index 11
    fn c100(date: &str) -> String {
        format!("|C100|0|1|F001|55|00|1|123|KEY|01012024|{date}|100,00|\n")
    }

    fn run(input: &str, range: DateRange) -> (String, FilterReport) {
        let filter = SpedDateFilter::default();
        let mut output = Vec::new();
        let report = filter
            .filter_stream(input.as_bytes(), &mut output, range, &mut ProgressReporter::silent(0))
            .unwrap();
        (String::from_utf8(output).unwrap(), report)
    }

    fn body(output: &str) -> Vec<&str> {
        output
            .lines()
            .take_while(|line| !line.starts_with("|9001|"))
            .collect()
    }

    #[test]
    fn test_header_is_rewritten() {
        let input = "|0000|017|0|01012024|31122024|ACME LTDA|\n";
        let range = DateRange::new(ymd(2024, 3, 1), ymd(2024, 3, 31));
        let (output, _) = run(input, range);

        assert_eq!(body(&output), vec!["|0000|017|0|01032024|31032024|ACME LTDA|"]);
    }

    #[test]
    fn test_short_header_is_kept() {
        let input = "|0000|017|0|\n|0001|0|\n";
        let (output, report) = run(input, january());

        assert_eq!(body(&output), vec!["|0000|017|0|", "|0001|0|"]);
        assert_eq!(report.record_counts.get("0000"), 1);
    }

    #[test]
    fn test_only_first_record_is_treated_as_header() {
        let input = "|0001|0|\n|0000|017|0|01012024|31122024|X|\n";
        let (output, _) = run(input, january());

        assert_eq!(
            body(&output),
            vec!["|0001|0|", "|0000|017|0|01012024|31122024|X|"]
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let input = [
            "|C001|0|\n".to_string(),
            c100("31122023"),
            c100("01012024"),
            c100("15012024"),
            c100("31012024"),
            c100("01022024"),
            "|C990|5|\n".to_string(),
        ]
        .concat();
        let (output, report) = run(&input, january());

        let kept: Vec<&str> = body(&output)
            .into_iter()
            .filter(|line| line.starts_with("|C100|"))
            .collect();
        assert_eq!(kept.len(), 3);
        assert!(kept[0].contains("|01012024|01012024|"));
        assert!(kept[1].contains("|15012024|"));
        assert!(kept[2].contains("|31012024|"));
        assert_eq!(report.documents_kept, 3);
        assert_eq!(report.documents_discarded, 2);
    }

    #[test]
    fn test_children_follow_their_document() {
        let input = [
            "|C001|0|\n".to_string(),
            c100("15012024"),
            "|C170|1|ITEM A|\n".to_string(),
            "|C190|000|5102|\n".to_string(),
            c100("15022024"),
            "|C170|1|ITEM B|\n".to_string(),
            "|C990|7|\n".to_string(),
        ]
        .concat();
        let (output, report) = run(&input, january());

        let lines = body(&output);
        assert!(lines.contains(&"|C170|1|ITEM A|"));
        assert!(lines.contains(&"|C190|000|5102|"));
        assert!(!lines.contains(&"|C170|1|ITEM B|"));
        assert_eq!(report.record_counts.get("C170"), 1);
    }

    #[test]
    fn test_closer_resets_document_decision() {
        let input = [
            "|C001|0|\n".to_string(),
            c100("15012024"),
            "|C990|3|\n".to_string(),
            "|D001|0|\n".to_string(),
            // Child without a document of its own
            "|D190|000|5353|\n".to_string(),
            "|D990|3|\n".to_string(),
        ]
        .concat();
        let (output, _) = run(&input, january());

        let lines = body(&output);
        assert!(lines.contains(&"|C990|3|"));
        assert!(lines.contains(&"|D001|0|"));
        assert!(lines.contains(&"|D990|3|"));
        assert!(!lines.contains(&"|D190|000|5353|"));
    }

    #[test]
    fn test_services_block_uses_its_own_index() {
        // D100 date at index 12, neighbours deliberately on the other side
        let kept = "|D100|0|1|P|57|00|1|1||KEY|10012024|20012024|15022024|\n";
        let dropped = "|D100|0|1|P|57|00|1|2||KEY|20012024|01022024|25012024|\n";
        let input = format!("|D001|0|\n{kept}{dropped}|D990|4|\n");
        let (output, _) = run(&input, january());

        let lines = body(&output);
        assert!(lines.contains(&kept.trim_end()));
        assert!(!lines.contains(&dropped.trim_end()));
    }

    #[test]
    fn test_missing_or_bad_date_discards() {
        let input = [
            "|C001|0|\n",
            "|C100|0|1|\n",
            "|C170|1|ORPHAN A|\n",
            "|C100|0|1|F001|55|00|1|123|KEY|01012024|||\n",
            "|C170|1|ORPHAN B|\n",
            "|C100|0|1|F001|55|00|1|123|KEY|01012024|35012024||\n",
            "|C170|1|ORPHAN C|\n",
            "|C990|8|\n",
        ]
        .concat();
        let (output, report) = run(&input, january());

        let lines = body(&output);
        assert_eq!(lines, vec!["|C001|0|", "|C990|8|"]);
        assert_eq!(report.documents_discarded, 3);
    }

    #[test]
    fn test_unfiltered_blocks_pass_through() {
        let input = "|E001|0|\n|E100|01012023|31012023|\n|E990|3|\n\
                     |H001|0|\n|H005|31122022|0|01|\n|H990|3|\n";
        let (output, _) = run(input, january());

        assert_eq!(
            body(&output),
            vec![
                "|E001|0|",
                "|E100|01012023|31012023|",
                "|E990|3|",
                "|H001|0|",
                "|H005|31122022|0|01|",
                "|H990|3|",
            ]
        );
    }

    #[test]
    fn test_input_block_9_is_replaced() {
        let input = "|0000|017|0|01012024|31012024|X|\n\
                     |9001|0|\n|9900|0000|1|\n|9990|3|\n|9999|5|\n";
        let (output, report) = run(input, january());

        assert_eq!(
            output,
            "|0000|017|0|01012024|31012024|X|\n\
             |9001|0|\n\
             |9900|0000|1|\n\
             |9900|9001|1|\n\
             |9900|9900|5|\n\
             |9990|6|\n\
             |9999|7|\n"
        );
        assert_eq!(report.lines_read, 5);
        assert_eq!(report.lines_written, 7);
        assert_eq!(output.lines().filter(|line| line.starts_with("|9001|")).count(), 1);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let input = "|0000|017|0|01012024|31122024|X|\nnot a sped line\n\n|0001|0|\n";
        let (output, report) = run(input, january());

        assert_eq!(body(&output), vec!["|0000|017|0|01012024|31012024|X|", "|0001|0|"]);
        assert_eq!(report.lines_read, 4);
        assert_eq!(report.malformed_lines, 2);
    }

    #[test]
    fn test_missing_final_newline_and_crlf() {
        let input = "|0001|0|\r\n|0990|2|";
        let (output, _) = run(input, january());

        assert!(output.starts_with("|0001|0|\r\n|0990|2|\n|9001|0|\n"));
    }

    #[test]
    fn test_digest_matches_written_bytes() {
        let filter = SpedDateFilter::new(FilterOptions {
            digest: Some(DigestAlgorithm::Sha256),
            ..FilterOptions::default()
        });
        let input = "|0000|017|0|01012024|31122024|X|\n|0001|0|\n|0990|2|\n";
        let mut output = Vec::new();
        let report = filter
            .filter_stream(input.as_bytes(), &mut output, january(), &mut ProgressReporter::silent(0))
            .unwrap();

        let digest = report.digest.unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, hex::encode(Sha256::digest(&output)));
    }

    #[test]
    fn test_digest_sha512() {
        let filter = SpedDateFilter::new(FilterOptions {
            digest: Some(DigestAlgorithm::Sha512),
            ..FilterOptions::default()
        });
        let mut output = Vec::new();
        let report = filter
            .filter_stream(&b"|0001|0|\n"[..], &mut output, january(), &mut ProgressReporter::silent(0))
            .unwrap();

        let digest = report.digest.unwrap();
        assert_eq!(digest.len(), 128);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_no_digest_by_default() {
        let (_, report) = run("|0001|0|\n", january());
        assert!(report.digest.is_none());
    }

    #[test]
    fn test_summary_mentions_counts_and_caveat() {
        let (_, report) = run("|0001|0|\n|0990|2|\n", january());
        let summary = report.summary();

        assert!(summary.contains("Lines read: 2"));
        assert!(summary.contains(&format!("Lines written: {}", report.lines_written)));
        assert!(summary.contains("Block E apuração NOT recalculated"));
    }

    #[test]
    fn test_panicking_callback_becomes_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "|0001|0|\n").unwrap();

        let mut callback = |percent: u8| {
            if percent == 100 {
                panic!("ui went away");
            }
        };
        let (ok, message) = SpedDateFilter::default().filter(
            &input,
            &dir.path().join("out.txt"),
            january(),
            Some(&mut callback),
        );

        assert!(!ok);
        assert!(message.contains("ui went away"), "{message}");
    }

    #[test]
    fn test_output_onto_input_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let content = "|0000|017|0|01012024|31012024|X|\n|0001|0|\n";
        std::fs::write(&input, content).unwrap();

        // Same file through a different spelling of the path
        let alias = dir.path().join(".").join("in.txt");
        let (ok, message) = SpedDateFilter::default().filter(&input, &alias, january(), None);

        assert!(!ok);
        assert!(message.contains("output file is the input file"), "{message}");
        assert_eq!(std::fs::read_to_string(&input).unwrap(), content);
    }

    #[test]
    fn test_windows_874_bad_byte_is_dropped() {
        let filter = SpedDateFilter::new(FilterOptions {
            encoding: TextEncoding::for_label("windows-874").unwrap(),
            ..FilterOptions::default()
        });
        let mut output = Vec::new();
        let report = filter
            .filter_stream(
                &b"|0150|P1|A\xdbB|\n"[..],
                &mut output,
                january(),
                &mut ProgressReporter::silent(0),
            )
            .unwrap();

        assert!(output.starts_with(b"|0150|P1|AB|\n|9001|0|\n"));
        assert!(!output.windows(2).any(|pair| pair == b"&#"));
        assert_eq!(report.lines_with_decode_errors, 1);
    }

    #[test]
    fn test_unknown_encoding_label() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "|0001|0|\n").unwrap();

        let (ok, message) =
            filter_sped_by_date(&input, &output, ymd(2024, 1, 1), ymd(2024, 1, 31), "ebcdic-x", None);

        assert!(!ok);
        assert!(message.contains("ebcdic-x"));
        assert!(!output.exists());
    }
}

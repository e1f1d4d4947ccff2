use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lines between two progress reports
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Throttled progress notifications for one pass
///
/// The callback runs on the thread doing the filtering; callers that own a
/// UI are expected to forward the value (e.g. through a channel).
pub struct ProgressReporter<'a> {
    callback: Option<&'a mut dyn FnMut(u8)>,
    total_lines: Option<u64>,
    interval: u64,
}

impl<'a> ProgressReporter<'a> {
    /// Report through `callback` every `interval` lines. Percentages are only
    /// sent when `total_lines` is known and non-zero; `finish` always sends 100.
    pub fn new(
        callback: Option<&'a mut dyn FnMut(u8)>,
        total_lines: Option<u64>,
        interval: u64,
    ) -> Self {
        ProgressReporter {
            callback,
            total_lines: total_lines.filter(|&total| total > 0),
            interval,
        }
    }

    /// Log-only reporter
    pub fn silent(interval: u64) -> Self {
        Self::new(None, None, interval)
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Called once per physical line read
    #[inline]
    pub fn on_line(&mut self, lines_read: u64) {
        if self.interval == 0 || lines_read % self.interval != 0 {
            return;
        }

        info!("Processed {} lines...", lines_read);
        if let (Some(callback), Some(total)) = (self.callback.as_deref_mut(), self.total_lines) {
            let percent = (lines_read.saturating_mul(100) / total).min(100);
            callback(u8::try_from(percent).unwrap_or(100));
        }
    }

    /// Guaranteed final report
    pub fn finish(&mut self) {
        if let Some(callback) = self.callback.as_deref_mut() {
            callback(100);
        }
    }
}

/// Count physical lines of a file without decoding it.
/// A last line without a terminator still counts.
pub fn count_lines(path: &Path) -> io::Result<u64> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut count = 0u64;
    let mut ends_with_newline = true;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        count += buf.iter().filter(|&&b| b == b'\n').count() as u64;
        ends_with_newline = buf.last() == Some(&b'\n');
        let consumed = buf.len();
        reader.consume(consumed);
    }

    if !ends_with_newline {
        count += 1;
    }
    Ok(count)
}

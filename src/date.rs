use chrono::NaiveDate;
use log::warn;
use std::fmt;

/// Parse a SPED date (`ddmmyyyy`).
///
/// Returns `None` for anything that is not exactly eight digits naming a real
/// calendar date. Wrong-length input is silently rejected; eight characters
/// that still fail are logged.
pub fn parse_sped_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 {
        return None;
    }

    let parsed = raw
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| {
            let day = raw.get(0..2)?.parse::<u32>().ok()?;
            let month = raw.get(2..4)?.parse::<u32>().ok()?;
            let year = raw.get(4..8)?.parse::<i32>().ok()?;
            if year < 1 {
                return None;
            }
            NaiveDate::from_ymd_opt(year, month, day)
        })
        .flatten();

    if parsed.is_none() {
        warn!("Malformed SPED date: '{}'", raw);
    }
    parsed
}

/// Format a date as `ddmmyyyy`
pub fn format_sped_date(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// Inclusive period of documents to keep
///
/// `start <= end` is not checked here; an inverted range simply matches no
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

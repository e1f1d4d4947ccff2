//! sped-date-filter - Streaming date-range filter for Brazilian SPED files
//!
//! This library cuts an EFD ICMS/IPI (SPED Fiscal) file down to the documents
//! of a given period. It is designed for exports of hundreds of thousands of
//! lines: the file is streamed once and never held in memory.
//!
//! # Key Features
//!
//! - **True streaming**: One read cursor and one write cursor, line by line
//! - **Document-level filtering**: Block C and D documents are kept or dropped
//!   by their business date, and their child records follow them
//! - **Consistent output**: The `0000` period is rewritten and block 9 is
//!   regenerated, ending in a self-counting `9999` record
//! - **Forgiving**: Malformed lines, bad dates and undecodable bytes are
//!   absorbed; only file-level failures abort a run
//! - **Checksums**: Optionally hash the output while it is written
//!
//! # Examples
//!
//! **Path based**, the way a UI would call it:
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use sped_date_filter::filter_sped_by_date;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let mut on_progress = |percent: u8| eprintln!("{percent}%");
//!
//! let (ok, message) = filter_sped_by_date(
//!     "SPED.txt",
//!     "SPED_JANUARY.txt",
//!     start,
//!     end,
//!     "latin1",
//!     Some(&mut on_progress),
//! );
//! println!("{ok}: {message}");
//! ```
//!
//! **Streaming** between any reader and writer, with a checksum:
//!
//! ```
//! use chrono::NaiveDate;
//! use sped_date_filter::{
//!     DateRange, DigestAlgorithm, FilterOptions, ProgressReporter, SpedDateFilter,
//! };
//!
//! let input = "|0000|017|0|01012024|31122024|ACME|\n|0001|0|\n|0990|2|\n";
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//! );
//! let filter = SpedDateFilter::new(FilterOptions {
//!     digest: Some(DigestAlgorithm::Sha256),
//!     ..FilterOptions::default()
//! });
//!
//! let mut output = Vec::new();
//! let report = filter
//!     .filter_stream(input.as_bytes(), &mut output, range, &mut ProgressReporter::silent(0))
//!     .unwrap();
//!
//! assert!(output.starts_with(b"|0000|017|0|01012024|31012024|ACME|\n"));
//! assert_eq!(report.digest.map(|d| d.len()), Some(64));
//! ```

pub mod checksum;
pub mod date;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod layout;
pub mod parser;
pub mod progress;
pub mod trailer;

pub use checksum::{ChecksumWriter, DigestAlgorithm};
pub use date::{format_sped_date, parse_sped_date, DateRange};
pub use encoding::TextEncoding;
pub use error::FilterError;
pub use filter::{filter_sped_by_date, FilterOptions, FilterReport, SpedDateFilter};
pub use progress::ProgressReporter;
pub use trailer::RecordCounts;

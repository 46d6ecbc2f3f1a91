//! Range ingestion from newline-delimited CIDR text.
//!
//! Every line is trimmed and parsed as a CIDR block of the requested
//! family. Lines that do not parse (blank lines, garbage, blocks of the
//! other family, out-of-range prefixes) are skipped without aborting.
//! Ranges come back in input order; sort them with
//! [`SortedRanges::new`](crate::SortedRanges::new) before searching.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::config::ParseOptions;
use crate::family::{AddressFamily, V4, V6};
use crate::range::{Ipv4Range, Ipv6Range, Range};
use crate::{Error, Result};

/// Running totals for one ingestion pass.
#[derive(Default)]
struct Tally {
    accepted: usize,
    skipped: usize,
}

impl Tally {
    fn push<F: AddressFamily>(
        &mut self,
        out: &mut Vec<Range<F>>,
        line: &str,
        options: &ParseOptions,
    ) {
        let candidate = options.clean(line);
        match candidate.parse::<F::Net>() {
            Ok(block) => {
                out.push(Range::new(block));
                self.accepted += 1;
            }
            Err(_) => {
                log::trace!("Skipping non-{} line: {:?}", F::NAME, candidate);
                self.skipped += 1;
            }
        }
    }

    fn finish<F: AddressFamily>(self) {
        log::debug!(
            "Parsed {} {} ranges ({} lines skipped)",
            self.accepted,
            F::NAME,
            self.skipped
        );
    }
}

/// Parse ranges from an in-memory string.
///
/// # Examples
/// ```
/// use iprange::{parse_str, V4};
///
/// let ranges = parse_str::<V4>("10.0.0.0/8\nnot a cidr\n 192.168.0.0/16 \n");
/// assert_eq!(ranges.len(), 2);
/// ```
pub fn parse_str<F: AddressFamily>(text: &str) -> Vec<Range<F>> {
    parse_str_with(text, &ParseOptions::default())
}

/// Parse ranges from an in-memory string with custom options.
pub fn parse_str_with<F: AddressFamily>(text: &str, options: &ParseOptions) -> Vec<Range<F>> {
    let mut ranges = Vec::new();
    let mut tally = Tally::default();

    for line in text.lines() {
        tally.push(&mut ranges, line, options);
    }

    tally.finish::<F>();
    ranges
}

/// Parse ranges from a reader.
pub fn parse_reader<F: AddressFamily, R: Read>(reader: R) -> Result<Vec<Range<F>>> {
    parse_reader_with(reader, &ParseOptions::default())
}

/// Parse ranges from a reader with custom options.
///
/// Lines that are not valid UTF-8 are skipped like any other malformed
/// line. Read failures are returned as [`Error::Io`].
pub fn parse_reader_with<F: AddressFamily, R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<Vec<Range<F>>> {
    let mut ranges = Vec::new();
    let mut tally = Tally::default();
    let buf_reader = BufReader::new(reader);

    for line in buf_reader.split(b'\n') {
        let line = line?;
        match std::str::from_utf8(&line) {
            Ok(text) => tally.push(&mut ranges, text, options),
            Err(_) => {
                log::trace!("Skipping non UTF-8 line");
                tally.skipped += 1;
            }
        }
    }

    tally.finish::<F>();
    Ok(ranges)
}

/// Parse ranges from a file.
///
/// Fails with [`Error::Open`] if the file cannot be opened.
pub fn parse_file<F: AddressFamily>(path: impl AsRef<Path>) -> Result<Vec<Range<F>>> {
    parse_file_with(path, &ParseOptions::default())
}

/// Parse ranges from a file with custom options.
pub fn parse_file_with<F: AddressFamily>(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Vec<Range<F>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading {} ranges from {:?}", F::NAME, path);
    parse_reader_with(file, options)
}

/// Parse IPv4 ranges from a string.
pub fn parse_ipv4_ranges(text: &str) -> Vec<Ipv4Range> {
    parse_str::<V4>(text)
}

/// Parse IPv6 ranges from a string.
pub fn parse_ipv6_ranges(text: &str) -> Vec<Ipv6Range> {
    parse_str::<V6>(text)
}

/// Parse IPv4 ranges from a file.
pub fn parse_ipv4_ranges_from_file(path: impl AsRef<Path>) -> Result<Vec<Ipv4Range>> {
    parse_file::<V4>(path)
}

/// Parse IPv6 ranges from a file.
pub fn parse_ipv6_ranges_from_file(path: impl AsRef<Path>) -> Result<Vec<Ipv6Range>> {
    parse_file::<V6>(path)
}

//! Streaming bounding box accumulation
//!
//! The [`Accumulator`] folds OBJ lines into [`BoundingBoxStats`] one line at a
//! time, so files of any size are scanned in constant memory. Scanning stops
//! at the first record that is neither a comment, a blank line nor a vertex;
//! vertex records after that point are not counted.

use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ObjError, Result};
use crate::record::{Record, VertexPoint};
use crate::stats::BoundingBoxStats;

/// Whether the accumulator wants more input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// More lines may change the result
    Continue,
    /// A terminating record was seen; further lines are ignored
    Stopped,
}

/// The record that ended a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    /// 1-based line number
    pub line: usize,
    /// Tag of the record
    pub tag: String,
}

/// Incremental vertex count and bounding box fold
///
/// # Examples
///
/// ```
/// use obj_stat::accumulator::{Accumulator, ScanState};
///
/// let mut acc = Accumulator::new();
/// assert_eq!(acc.feed("v 1 2 3").unwrap(), ScanState::Continue);
/// assert_eq!(acc.feed("f 1 1 1").unwrap(), ScanState::Stopped);
/// assert_eq!(acc.feed("v 9 9 9").unwrap(), ScanState::Stopped);
///
/// assert_eq!(acc.stopped_at().map(|s| s.line), Some(2));
/// assert_eq!(acc.finish().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Accumulator {
    stats: BoundingBoxStats,
    lines_read: usize,
    stopped_at: Option<StopRecord>,
}

impl Accumulator {
    /// Creates an accumulator with no vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one line
    ///
    /// Returns an error if the line is a vertex record with missing or
    /// non-numeric coordinates. Once a scan has stopped, lines are ignored
    /// and do not advance the line counter.
    pub fn feed(&mut self, line: &str) -> Result<ScanState> {
        if self.stopped_at.is_some() {
            return Ok(ScanState::Stopped);
        }

        self.lines_read += 1;
        let line_no = self.lines_read;

        match Record::classify(line) {
            Record::Comment | Record::Blank => {}
            Record::Vertex { fields } => {
                let point = VertexPoint::parse(fields, line_no, line)?;
                trace!("Line {}: vertex ({}, {}, {})", line_no, point.x, point.y, point.z);
                self.stats.add(point);
            }
            Record::Other { tag } => {
                debug!(
                    "Stopping scan at line {} on '{}' record after {} vertices",
                    line_no,
                    tag,
                    self.stats.count()
                );
                self.stopped_at = Some(StopRecord {
                    line: line_no,
                    tag: tag.to_string(),
                });
                return Ok(ScanState::Stopped);
            }
        }

        Ok(ScanState::Continue)
    }

    /// Feeds lines from a reader until it is exhausted or the scan stops
    ///
    /// Nothing past the terminating record is read from `reader`.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<ScanState> {
        for line in reader.lines() {
            if self.feed(&line?)? == ScanState::Stopped {
                return Ok(ScanState::Stopped);
            }
        }
        Ok(self.state())
    }

    /// Current scan state
    pub fn state(&self) -> ScanState {
        if self.stopped_at.is_some() {
            ScanState::Stopped
        } else {
            ScanState::Continue
        }
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> &BoundingBoxStats {
        &self.stats
    }

    /// Number of lines examined, including the terminating record
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// The record that stopped the scan, if any
    pub fn stopped_at(&self) -> Option<&StopRecord> {
        self.stopped_at.as_ref()
    }

    /// Consumes the accumulator and returns the final statistics
    pub fn finish(self) -> BoundingBoxStats {
        debug!(
            "Scan finished after {} lines: {} vertices",
            self.lines_read,
            self.stats.count()
        );
        self.stats
    }
}

/// Computes statistics over a sequence of lines
///
/// # Examples
///
/// ```
/// use obj_stat::accumulate;
///
/// let stats = accumulate(["# comment", "", "v 0.0 0.0 0.0"]).unwrap();
/// assert_eq!(stats.count(), 1);
/// assert_eq!(stats.bounds().unwrap().max_z(), 0.0);
/// ```
pub fn accumulate<I, S>(lines: I) -> Result<BoundingBoxStats>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = Accumulator::new();
    for line in lines {
        if acc.feed(line.as_ref())? == ScanState::Stopped {
            break;
        }
    }
    Ok(acc.finish())
}

/// Computes statistics over the lines of a reader
pub fn accumulate_reader<R: BufRead>(reader: R) -> Result<BoundingBoxStats> {
    let mut acc = Accumulator::new();
    acc.read_from(reader)?;
    Ok(acc.finish())
}

/// Opens an OBJ file for scanning
///
/// A path that does not exist yields [`ObjError::InputNotFound`]; other
/// failures are reported as [`ObjError::Io`].
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ObjError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ObjError::Io(e)),
    }
}

/// Computes statistics for the OBJ file at `path`
pub fn accumulate_file<P: AsRef<Path>>(path: P) -> Result<BoundingBoxStats> {
    let path = path.as_ref();
    debug!("Scanning {}", path.display());
    accumulate_reader(open_input(path)?)
}

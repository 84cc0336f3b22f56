use std::{
    fs::File,
    io::{BufRead as _, BufReader, Read},
    path::Path,
};

use crate::foundation::{
    config::RenderConfig,
    core::{Frame, Rgb8},
    error::{LedTraceError, LedTraceResult},
};

/// Outcome of reading one input row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowParse {
    /// The row held a complete frame.
    Frame(Frame),
    /// The row could not be turned into a frame; the current pass must stop here.
    Malformed(MalformedRow),
}

/// A row that ended the pass, with where and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line in the input, when the reader knows it.
    pub line: Option<u64>,
    /// What was wrong with it.
    pub defect: RowDefect,
}

/// Why a row was rejected.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum RowDefect {
    /// Not enough fields to fill every LED.
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields {
        /// Fields required for a full frame.
        expected: usize,
        /// Fields present.
        found: usize,
    },
    /// A channel field was not an integer.
    #[error("field {field} is not an integer: {value:?}")]
    NotAnInteger {
        /// 0-based field position.
        field: usize,
        /// Raw field text.
        value: String,
    },
    /// The reader itself failed (bad UTF-8, IO error mid-file).
    #[error("unreadable row: {0}")]
    Unreadable(String),
}

/// Strip the line terminator (`\n` or `\r\n`).
fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Split one input line into fields. `None` for an empty line.
fn read_fields(line: &[u8]) -> Result<Option<csv::StringRecord>, csv::Error> {
    if line.is_empty() {
        return Ok(None);
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line);
    let mut record = csv::StringRecord::new();
    Ok(rdr.read_record(&mut record)?.then_some(record))
}

/// Turn one CSV record into a frame of `cfg.num_leds` LEDs.
///
/// Only the first [`RenderConfig::fields_per_row`] fields are read; anything after them is
/// ignored. Channel values outside `0..=255` saturate.
pub fn parse_record(
    record: &csv::StringRecord,
    cfg: &RenderConfig,
    line: Option<u64>,
) -> RowParse {
    let malformed = |defect| RowParse::Malformed(MalformedRow { line, defect });

    let expected = cfg.fields_per_row();
    if record.len() < expected {
        return malformed(RowDefect::TooFewFields {
            expected,
            found: record.len(),
        });
    }

    let num_leds = expected / 3;
    let mut channels = [0i64; 3];
    let mut leds = Vec::with_capacity(num_leds);
    for led in 0..num_leds {
        for (c, slot) in channels.iter_mut().enumerate() {
            let field = led * 3 + c;
            let raw = record.get(field).unwrap_or_default();
            match raw.trim().parse::<i64>() {
                Ok(v) => *slot = v,
                Err(_) => {
                    return malformed(RowDefect::NotAnInteger {
                        field,
                        value: raw.to_string(),
                    });
                }
            }
        }
        let [r, g, b] = channels;
        leds.push(Rgb8::saturating_from_i64(r, g, b));
    }
    RowParse::Frame(Frame::new(leds))
}

/// Streams frames out of a headerless CSV table, one line per frame.
///
/// Every line is a row, blank ones included: a blank line has no fields and ends the pass like
/// any other short row.
pub struct FrameReader<R: Read> {
    rdr: BufReader<R>,
    buf: Vec<u8>,
    line: u64,
    cfg: RenderConfig,
}

impl FrameReader<File> {
    /// Open the table at `path`.
    pub fn open(path: &Path, cfg: &RenderConfig) -> LedTraceResult<Self> {
        let f = File::open(path)
            .map_err(|e| LedTraceError::input(format!("open '{}': {e}", path.display())))?;
        Ok(Self::from_reader(f, cfg))
    }
}

impl<R: Read> FrameReader<R> {
    /// Read frames from any byte source.
    pub fn from_reader(rdr: R, cfg: &RenderConfig) -> Self {
        Self {
            rdr: BufReader::new(rdr),
            buf: Vec::new(),
            line: 0,
            cfg: cfg.clone(),
        }
    }

    fn parse_line(&self) -> RowParse {
        let line = Some(self.line);
        match read_fields(trim_eol(&self.buf)) {
            Ok(Some(record)) => parse_record(&record, &self.cfg, line),
            Ok(None) => RowParse::Malformed(MalformedRow {
                line,
                defect: RowDefect::TooFewFields {
                    expected: self.cfg.fields_per_row(),
                    found: 0,
                },
            }),
            Err(e) => RowParse::Malformed(MalformedRow {
                line,
                defect: RowDefect::Unreadable(e.to_string()),
            }),
        }
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = RowParse;

    fn next(&mut self) -> Option<RowParse> {
        self.buf.clear();
        let read = self.rdr.read_until(b'\n', &mut self.buf);
        if matches!(read, Ok(0)) {
            return None;
        }
        self.line += 1;
        match read {
            Ok(_) => Some(self.parse_line()),
            Err(e) => Some(RowParse::Malformed(MalformedRow {
                line: Some(self.line),
                defect: RowDefect::Unreadable(e.to_string()),
            })),
        }
    }
}

/// Count the rows (frames) in a byte source without parsing their values.
///
/// Every line counts, blank ones included; a final line without a terminator counts too.
pub fn count_rows<R: Read>(rdr: R) -> LedTraceResult<u64> {
    let mut rdr = BufReader::new(rdr);
    let mut buf = Vec::new();
    let mut n = 0u64;
    loop {
        buf.clear();
        match rdr.read_until(b'\n', &mut buf) {
            Ok(0) => return Ok(n),
            Ok(_) => n += 1,
            Err(e) => return Err(LedTraceError::input(format!("count rows: {e}"))),
        }
    }
}

/// Count the frames in the table at `path`.
pub fn count_frames(path: &Path) -> LedTraceResult<u64> {
    let f = File::open(path)
        .map_err(|e| LedTraceError::input(format!("open '{}': {e}", path.display())))?;
    count_rows(f)
}

#[cfg(test)]
#[path = "../../tests/unit/input/rows.rs"]
mod tests;

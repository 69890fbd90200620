//! Point provider for pipe-delimited `x|y|z` coordinate files.
//!
//! Reads a line-oriented source in a single forward pass and assembles a
//! [`PointCloud`]. Each line is split on `|`; the first three fields are the
//! x, y, and z coordinates in that order and any further fields are ignored.
//! Lines with fewer than three fields contribute no point: they are skipped
//! with a warning so the surviving points keep their positional alignment
//! with the emitted labels.

use std::io::BufRead;
use std::num::ParseFloatError;
use std::{fmt, io};

use thiserror::Error;
use tracing::warn;

use cumulo_core::{Point3, PointCloud};

/// Field delimiter used by the coordinate format.
pub const DELIMITER: char = '|';

/// Coordinate axis a field maps onto, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First field on a line.
    X,
    /// Second field on a line.
    Y,
    /// Third field on a line.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Errors surfaced while reading a pipe-delimited coordinate source.
#[derive(Debug, Error)]
pub enum PipeSourceError {
    /// A coordinate field was not a valid floating-point number.
    #[error("line {line}: invalid {axis} coordinate `{token}`: {source}")]
    InvalidCoordinate {
        /// One-based line number of the offending line.
        line: usize,
        /// Axis the malformed field maps onto.
        axis: Axis,
        /// Raw token that failed to parse.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// The underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Reads every line of `reader` and assembles the points into a
/// [`PointCloud`] named `name`.
///
/// Extraction is strict about field contents and lenient about field
/// counts: a malformed numeric token aborts the read, while short lines are
/// skipped with a warning and blank lines are ignored outright.
///
/// # Errors
/// Returns [`PipeSourceError::InvalidCoordinate`] for a malformed numeric
/// field and [`PipeSourceError::Io`] when the reader fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use cumulo_providers_pipe::read_cloud;
///
/// let cloud = read_cloud("demo", Cursor::new("1.0|2.0|3.0\n4.0|5.0|6.0\n"))
///     .expect("input is well formed");
/// assert_eq!(cloud.len(), 2);
/// assert_eq!(cloud.points()[1].coords(), [4.0, 5.0, 6.0]);
/// ```
pub fn read_cloud(
    name: impl Into<String>,
    reader: impl BufRead,
) -> Result<PointCloud, PipeSourceError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(point) = parse_line(index + 1, &line)? {
            points.push(point);
        }
    }
    Ok(PointCloud::new(name, points))
}

/// Parses a single line into a point, or `None` when the line carries no
/// point (blank, or fewer than three fields).
fn parse_line(line_no: usize, line: &str) -> Result<Option<Point3>, PipeSourceError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    // Only the first three fields matter; field four onwards is ignored.
    let mut fields = line.split(DELIMITER);
    let (Some(x), Some(y), Some(z)) = (fields.next(), fields.next(), fields.next()) else {
        let count = line.split(DELIMITER).count();
        warn!(line = line_no, fields = count, "skipping line with fewer than three fields");
        return Ok(None);
    };

    Ok(Some(Point3::new(
        parse_coordinate(line_no, Axis::X, x)?,
        parse_coordinate(line_no, Axis::Y, y)?,
        parse_coordinate(line_no, Axis::Z, z)?,
    )))
}

/// Parses one coordinate field, tolerating surrounding whitespace (including
/// the `\r` left behind by CRLF line endings).
fn parse_coordinate(line: usize, axis: Axis, token: &str) -> Result<f64, PipeSourceError> {
    let trimmed = token.trim();
    trimmed
        .parse::<f64>()
        .map_err(|source| PipeSourceError::InvalidCoordinate {
            line,
            axis,
            token: trimmed.to_owned(),
            source,
        })
}

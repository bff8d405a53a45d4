//! Well-log table acquisition.
//!
//! Loads a depth-ordered CSV export into [`LogRow`]s. Column positions
//! are resolved from the header row, so exports with extra or reordered
//! columns parse correctly as long as the required headers are present.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::types::{FaciesLabel, LogRow, PREDICTED_COLUMN};

/// Errors raised while loading the input table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("input table is empty (no header row)")]
    Empty,
    #[error("missing required column '{0}' in header")]
    MissingColumn(&'static str),
    #[error("row {line}: column '{column}' is not numeric: '{value}'")]
    BadNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {line}: expected at least {expected} fields, found {found}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Split a CSV line respecting quoted fields (handles commas inside quotes).
fn csv_split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if chars.peek() == Some(&'"') {
                        current.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.clone());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Header-resolved column indices for the required features.
#[derive(Debug, Default)]
struct ColumnMap {
    depth: Option<usize>,
    gr: Option<usize>,
    ild_log10: Option<usize>,
    delta_phi: Option<usize>,
    phind: Option<usize>,
    pe: Option<usize>,
    nm_m: Option<usize>,
    relpos: Option<usize>,
    predicted: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &str) -> Self {
        let mut map = Self::default();
        for (idx, col) in csv_split(header).iter().enumerate() {
            match col.trim() {
                "Depth" => map.depth = Some(idx),
                "GR" => map.gr = Some(idx),
                "ILD_log10" => map.ild_log10 = Some(idx),
                "DeltaPHI" => map.delta_phi = Some(idx),
                "PHIND" => map.phind = Some(idx),
                "PE" => map.pe = Some(idx),
                "NM_M" => map.nm_m = Some(idx),
                "RELPOS" => map.relpos = Some(idx),
                c if c == PREDICTED_COLUMN => map.predicted = Some(idx),
                _ => {}
            }
        }
        map
    }

    fn require(idx: Option<usize>, name: &'static str) -> Result<usize, TableError> {
        idx.ok_or(TableError::MissingColumn(name))
    }
}

fn parse_field(
    fields: &[String],
    idx: usize,
    column: &'static str,
    line: usize,
) -> Result<f64, TableError> {
    let raw = fields
        .get(idx)
        .ok_or(TableError::ShortRow {
            line,
            expected: idx + 1,
            found: fields.len(),
        })?
        .trim();
    raw.parse::<f64>().map_err(|_| TableError::BadNumber {
        line,
        column,
        value: raw.to_string(),
    })
}

/// Load a depth-ordered well-log table from a CSV file.
///
/// Blank lines are skipped. A predicted-facies value outside the nine
/// categories is treated as absent (warned), matching the pipeline's
/// tolerance for unlabeled exports. Non-monotonic depth ordering is
/// warned about but not fatal: windowing operates on row order.
pub fn load_table(path: &Path) -> Result<Vec<LogRow>, TableError> {
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut lines = BufReader::new(file).lines();

    let header = lines
        .next()
        .transpose()
        .map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?
        .ok_or(TableError::Empty)?;

    let map = ColumnMap::from_header(&header);
    let depth_idx = ColumnMap::require(map.depth, "Depth")?;
    let gr_idx = ColumnMap::require(map.gr, "GR")?;
    let ild_idx = ColumnMap::require(map.ild_log10, "ILD_log10")?;
    let dphi_idx = ColumnMap::require(map.delta_phi, "DeltaPHI")?;
    let phind_idx = ColumnMap::require(map.phind, "PHIND")?;
    let pe_idx = ColumnMap::require(map.pe, "PE")?;
    let nm_m_idx = ColumnMap::require(map.nm_m, "NM_M")?;
    let relpos_idx = ColumnMap::require(map.relpos, "RELPOS")?;

    let mut rows = Vec::new();
    let mut prev_depth = f64::NEG_INFINITY;

    for (line_no, line) in lines.enumerate() {
        let line = line.map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        // 1-based data line number, header excluded
        let line_no = line_no + 2;
        let fields = csv_split(&line);

        let predicted_facies = map.predicted.and_then(|idx| {
            let raw = fields.get(idx).map(|s| s.trim()).unwrap_or("");
            if raw.is_empty() {
                return None;
            }
            let parsed = FaciesLabel::parse(raw);
            if parsed.is_none() {
                warn!(line = line_no, value = raw, "Unrecognized predicted facies label, ignoring");
            }
            parsed
        });

        let row = LogRow {
            depth: parse_field(&fields, depth_idx, "Depth", line_no)?,
            gr: parse_field(&fields, gr_idx, "GR", line_no)?,
            ild_log10: parse_field(&fields, ild_idx, "ILD_log10", line_no)?,
            delta_phi: parse_field(&fields, dphi_idx, "DeltaPHI", line_no)?,
            phind: parse_field(&fields, phind_idx, "PHIND", line_no)?,
            pe: parse_field(&fields, pe_idx, "PE", line_no)?,
            nm_m: parse_field(&fields, nm_m_idx, "NM_M", line_no)?,
            relpos: parse_field(&fields, relpos_idx, "RELPOS", line_no)?,
            predicted_facies,
        };

        if row.depth < prev_depth {
            warn!(
                line = line_no,
                depth = row.depth,
                "Depth decreases from previous row, table may not be depth-ordered"
            );
        }
        prev_depth = row.depth;
        rows.push(row);
    }

    Ok(rows)
}

//! Append-only JSONL result log.
//!
//! One serialized [`ResultRecord`] per line. The number of valid records
//! already in the file is the only resume state the pipeline has, so
//! every append is flushed before the next window starts and corrupt
//! trailing lines are tolerated on open.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::types::ResultRecord;

#[derive(Debug, thiserror::Error)]
pub enum ResultLogError {
    #[error("failed to open result log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write result record: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to serialize result record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only writer over the output JSONL file.
pub struct ResultLog {
    writer: BufWriter<File>,
    records_written: usize,
}

impl ResultLog {
    /// Open (or create) the log and count the valid records already in it.
    ///
    /// A line that does not deserialize as a [`ResultRecord`] stops the
    /// count: everything after a corrupt line is treated as not written,
    /// and those windows will be re-processed and re-appended.
    pub fn open(path: &Path) -> Result<Self, ResultLogError> {
        let existing = match File::open(path) {
            Ok(file) => count_valid_records(&mut BufReader::new(file)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => 0,
            Err(source) => {
                return Err(ResultLogError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ResultLogError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), records = existing, "Result log opened");

        Ok(Self {
            writer: BufWriter::new(file),
            records_written: existing,
        })
    }

    /// Number of valid records in the log, counting prior runs.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Serialize one record, append it, and flush to disk.
    pub fn append(&mut self, record: &ResultRecord) -> Result<(), ResultLogError> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.records_written += 1;
        Ok(())
    }
}

fn count_valid_records(reader: &mut impl BufRead) -> usize {
    let mut count = 0;
    for (line_no, line) in reader.lines().enumerate() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        if serde_json::from_str::<ResultRecord>(&line).is_ok() {
            count += 1;
        } else {
            warn!(
                line = line_no + 1,
                "Corrupt record in result log, re-processing from here"
            );
            break;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AggregationResult, ConsistencyReport, FaciesLabel, FinalAnswer, KnowledgeContext,
        ToolSelection,
    };

    fn record(window_index: usize) -> ResultRecord {
        ResultRecord {
            window_index,
            completed_at: chrono::Utc::now(),
            window_rows: Vec::new(),
            up_context: Vec::new(),
            down_context: Vec::new(),
            is_full_window: true,
            tool_selection: ToolSelection {
                tools: Vec::new(),
                rationale: String::new(),
                raw_answer: String::new(),
            },
            knowledge: KnowledgeContext::default(),
            panel: Vec::new(),
            aggregation: AggregationResult {
                final_labels_before_env_fix: vec![FaciesLabel::Mudstone],
                final_labels: vec![FaciesLabel::Mudstone],
                agreement_per_depth: vec![1.0],
                global_agreement: 1.0,
            },
            consistency: ConsistencyReport::default(),
            primary_prompt: String::new(),
            primary_rationale: String::new(),
            final_answer: FinalAnswer {
                answer: vec![FaciesLabel::Mudstone],
            },
        }
    }

    #[test]
    fn test_open_append_reopen_counts_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");

        let mut log = ResultLog::open(&path).unwrap();
        assert_eq!(log.records_written(), 0);
        log.append(&record(0)).unwrap();
        log.append(&record(1)).unwrap();
        drop(log);

        let log = ResultLog::open(&path).unwrap();
        assert_eq!(log.records_written(), 2);
    }

    #[test]
    fn test_corrupt_tail_stops_the_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");

        let mut log = ResultLog::open(&path).unwrap();
        log.append(&record(0)).unwrap();
        drop(log);

        std::fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"{\"window_index\": 1, truncated\n")
            .unwrap();

        let log = ResultLog::open(&path).unwrap();
        assert_eq!(log.records_written(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.jsonl");

        let mut log = ResultLog::open(&path).unwrap();
        log.append(&record(0)).unwrap();
        drop(log);

        std::fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap()
            .write_all(b"\n")
            .unwrap();

        let mut log = ResultLog::open(&path).unwrap();
        assert_eq!(log.records_written(), 1);
        log.append(&record(1)).unwrap();
        assert_eq!(log.records_written(), 2);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = ResultLog::open(&dir.path().join("fresh.jsonl")).unwrap();
        assert_eq!(log.records_written(), 0);
    }
}

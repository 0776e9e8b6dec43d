use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;

/// Complete record of one simulation run: inputs, seed, and outcome.
/// Serialized to JSONL format so runs can be collected and compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unique identifier for this run (format: YYYYMMDD-NNNNNN)
    pub run_id: String,
    /// RNG seed used for sampling (enables deterministic reruns)
    pub seed: Option<u64>,
    /// Number of players at the table, hero included
    pub players: usize,
    /// The hero's 2 hole cards
    pub hero: Vec<Card>,
    /// Known community cards at simulation start (0, 3, 4, or 5)
    pub community: Vec<Card>,
    /// Number of trials simulated
    pub trials: u64,
    /// Trials the hero won outright
    pub wins: u64,
    /// Empirical win probability, wins / trials
    pub equity: f64,
    /// Timestamp when the run finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_run_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RunRecord`]s to a JSONL file, one line per run.
pub struct RunLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RunLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::options().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_run_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RunRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

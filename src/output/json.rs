//! JSON output formatting
//!
//! Reports carry a UTC timestamp, the settings that produced them, and the
//! drawn values. Parameter values serialize as plain JSON scalars.

use crate::distribution::ParamValue;
use crate::random::RandomState;
use crate::search::{Candidate, SearchSpace, SearchStrategy};
use crate::Result;
use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Report for `paramdraw sample`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSampleReport {
    pub generated_at: String,
    pub distribution: String,
    pub low: f64,
    pub high: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub samples: Vec<ParamValue>,
}

impl JsonSampleReport {
    pub fn new(
        distribution: String,
        low: f64,
        high: f64,
        state: RandomState,
        samples: Vec<ParamValue>,
    ) -> Self {
        Self {
            generated_at: timestamp_now(),
            distribution,
            low,
            high,
            seed: state.seed(),
            samples,
        }
    }
}

/// Report for `paramdraw search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSearchReport {
    pub generated_at: String,
    pub strategy: SearchStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Distribution of each parameter, in display form
    pub space: BTreeMap<String, String>,
    pub n_candidates: usize,
    pub candidates: Vec<Candidate>,
}

impl JsonSearchReport {
    pub fn new(
        strategy: SearchStrategy,
        state: RandomState,
        space: &SearchSpace,
        candidates: Vec<Candidate>,
    ) -> Self {
        Self {
            generated_at: timestamp_now(),
            strategy,
            // Grid enumeration ignores the seed
            seed: match strategy {
                SearchStrategy::Random => state.seed(),
                SearchStrategy::Grid => None,
            },
            space: space
                .iter()
                .map(|(name, dist)| (name.clone(), dist.to_string()))
                .collect(),
            n_candidates: candidates.len(),
            candidates,
        }
    }
}

/// Write a report to a file, or stdout when no path is given
pub fn write_json_output<T: Serialize>(output_path: Option<&Path>, report: &T) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create JSON output: {}", path.display()))?;
            serde_json::to_writer_pretty(file, report)
                .with_context(|| format!("Failed to write JSON output: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, report)
                .context("Failed to write JSON to stdout")?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::ParamDistribution;

    #[test]
    fn test_sample_report_shape() {
        let report = JsonSampleReport::new(
            "log_uniform_int".to_string(),
            2.0,
            256.0,
            RandomState::Seed(0),
            vec![ParamValue::Int(3), ParamValue::Int(140)],
        );
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["seed"], 0);
        assert_eq!(value["samples"], serde_json::json!([3, 140]));
        assert!(value["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_search_report_shape() {
        let space = SearchSpace::new()
            .with("max_depth", ParamDistribution::choice([2i64, 4]).unwrap());
        let mut candidate = Candidate::new();
        candidate.insert("max_depth".to_string(), ParamValue::Int(4));

        let report = JsonSearchReport::new(
            SearchStrategy::Grid,
            RandomState::Seed(1),
            &space,
            vec![candidate],
        );
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["strategy"], "grid");
        assert!(value.get("seed").is_none());
        assert_eq!(value["n_candidates"], 1);
        assert_eq!(value["space"]["max_depth"], "choice[2, 4]");
        assert_eq!(value["candidates"][0]["max_depth"], 4);
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = JsonSampleReport::new(
            "log_uniform".to_string(),
            0.01,
            10.0,
            RandomState::Entropy,
            vec![ParamValue::Float(0.5)],
        );

        write_json_output(Some(path.as_path()), &report).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: JsonSampleReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.samples, vec![ParamValue::Float(0.5)]);
        assert_eq!(parsed.seed, None);
    }
}

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

pub trait Output {
    /// Writes the output as JSON and returns the path actually written
    fn write_to_file(&self, output_file: &str) -> Result<String>;
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReverseRecord {
    pub address: String,
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReverseFailure {
    pub address: String,
    pub error: String,
}

#[derive(Serialize, Debug, Default)]
pub struct ReverseOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub results: Vec<ReverseRecord>,
    pub failures: Vec<ReverseFailure>,
}

impl Output for ReverseOutput {
    fn write_to_file(&self, output_file: &str) -> Result<String> {
        write_json(&self, output_file)
    }
}

impl ReverseOutput {
    pub const fn new(zone: Option<String>) -> Self {
        Self {
            zone,
            results: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn add_result(&mut self, address: String, name: String) {
        self.results.push(ReverseRecord { address, name });
    }

    pub fn add_failure(&mut self, address: String, error: String) {
        self.failures.push(ReverseFailure { address, error });
    }
}

fn json_path(output_file: &str) -> String {
    if Path::new(output_file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        output_file.to_string()
    } else {
        format!("{output_file}.json")
    }
}

fn write_json<T: Serialize>(data: &T, output_file: &str) -> Result<String> {
    let output_file = json_path(output_file);

    let file = File::create(&output_file)
        .with_context(|| format!("Failed to create JSON output file: {output_file}"))?;
    serde_json::to_writer_pretty(file, data)?;

    Ok(output_file)
}

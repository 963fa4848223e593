use std::fs;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::digits::Precision;
use crate::Result;

const ROW_WIDTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub position: i64,
    pub count: usize,
    pub precision: Precision,
    pub digits: String,
    /// Digits split into rows, keyed by the position of each row's first digit
    pub rows: IndexMap<i64, String>,
}

impl RunReport {
    pub fn new(position: i64, precision: Precision, digits: String) -> RunReport {
        let chars: Vec<char> = digits.chars().collect();
        let mut rows = IndexMap::new();
        let mut offset = position;
        for row in chars.chunks(ROW_WIDTH) {
            rows.insert(offset, row.iter().collect::<String>());
            offset += row.len() as i64;
        }
        RunReport {
            position,
            count: chars.len(),
            precision,
            digits,
            rows,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path.as_ref())?;
        file.write_all(yaml.as_bytes())?;
        tracing::info!("Wrote report to {}", path.as_ref().display());
        Ok(())
    }
}

use super::domain::{DemandRecord, THRESHOLD_MAX};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read demand dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid demand CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("demand dataset has no records")]
    Empty,
    #[error("row {row}: education field must not be blank")]
    BlankField { row: usize },
    #[error("row {row}: skill must not be blank")]
    BlankSkill { row: usize },
    #[error("row {row}: demand {value}% exceeds 100%")]
    DemandOutOfRange { row: usize, value: u8 },
    #[error("row {row}: duplicate entry for {skill_needed} in {education_field}")]
    Duplicate {
        row: usize,
        education_field: String,
        skill_needed: String,
    },
}

/// Read-only demand table shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDemandDataset {
    records: Vec<DemandRecord>,
}

impl SkillDemandDataset {
    /// Builds a dataset after checking names, ranges, and pair uniqueness.
    /// Names are trimmed; `row` in errors is 1-based.
    pub fn new(records: Vec<DemandRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut cleaned = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let row = index + 1;
            let education_field = record.education_field.trim().to_string();
            let skill_needed = record.skill_needed.trim().to_string();

            if education_field.is_empty() {
                return Err(DatasetError::BlankField { row });
            }
            if skill_needed.is_empty() {
                return Err(DatasetError::BlankSkill { row });
            }
            if record.demand_percent > THRESHOLD_MAX {
                return Err(DatasetError::DemandOutOfRange {
                    row,
                    value: record.demand_percent,
                });
            }
            if !seen.insert((education_field.clone(), skill_needed.clone())) {
                return Err(DatasetError::Duplicate {
                    row,
                    education_field,
                    skill_needed,
                });
            }

            cleaned.push(DemandRecord {
                education_field,
                skill_needed,
                demand_percent: record.demand_percent,
            });
        }

        Ok(Self { records: cleaned })
    }

    /// The four-row table the dashboard ships with.
    pub fn sample() -> Self {
        Self {
            records: vec![
                DemandRecord::new("Computer Science", "Python", 75),
                DemandRecord::new("Computer Science", "JavaScript", 65),
                DemandRecord::new("Engineering", "Matlab", 50),
                DemandRecord::new("Engineering", "C++", 40),
            ],
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Expects the header `Education Field,Skill Needed,Skill Demand (%)`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<DemandRow>() {
            let row = row?;
            records.push(DemandRecord {
                education_field: row.education_field,
                skill_needed: row.skill_needed,
                demand_percent: row.demand_percent,
            });
        }

        Self::new(records)
    }

    pub fn records(&self) -> &[DemandRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct fields in first-seen order.
    pub fn education_fields(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.education_field.as_str()))
    }

    /// Distinct skills in first-seen order.
    pub fn skills(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.skill_needed.as_str()))
    }

    /// Rows for `education_field` whose demand meets `threshold`, in table order.
    pub fn filter(&self, education_field: &str, threshold: u8) -> Vec<&DemandRecord> {
        self.records
            .iter()
            .filter(|r| r.education_field == education_field && r.demand_percent >= threshold)
            .collect()
    }

    pub fn lookup(&self, education_field: &str, skill_needed: &str) -> Option<&DemandRecord> {
        self.records
            .iter()
            .find(|r| r.matches(education_field, skill_needed))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

#[derive(Debug, Deserialize)]
struct DemandRow {
    #[serde(rename = "Education Field")]
    education_field: String,
    #[serde(rename = "Skill Needed")]
    skill_needed: String,
    #[serde(rename = "Skill Demand (%)")]
    demand_percent: u8,
}

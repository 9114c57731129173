//! Structural validation of a parsed batch document.
//!
//! Validation is exhaustive: every defect in the document is collected so the
//! whole file can be fixed in one pass.

use std::fmt;

use serde_json::{Map, Value};
use crate::domain::GenerationRequest;
use crate::domain::batch::{Batch, BatchName, BatchSpec};

/// One structural problem found in a batch document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    RootNotMapping,
    NoBatches,
    BatchNotList { batch: String },
    EmptyBatch { batch: String },
    ItemNotMapping { batch: String, index: usize },
    MissingField { batch: String, index: usize, field: &'static str },
    WrongFieldType { batch: String, index: usize, field: &'static str, found: &'static str },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::RootNotMapping => write!(f, "Batch file must contain a top-level object"),
            Defect::NoBatches => {
                write!(f, "No batches found. Batches should be named batch_1, batch_2, etc.")
            }
            Defect::BatchNotList { batch } => write!(f, "{batch} must be an array"),
            Defect::EmptyBatch { batch } => write!(f, "{batch} is empty"),
            Defect::ItemNotMapping { batch, index } => {
                write!(f, "{batch}[{index}] must be an object")
            }
            Defect::MissingField { batch, index, field } => {
                write!(f, "{batch}[{index}] is missing '{field}' field")
            }
            Defect::WrongFieldType { batch, index, field, found } => {
                write!(f, "{batch}[{index}].{field} must be a string (found {found})")
            }
        }
    }
}

/// Every defect found in a batch document, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    defects: Vec<Defect>,
}

impl ValidationErrors {
    pub fn single(defect: Defect) -> Self {
        Self { defects: vec![defect] }
    }

    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid batch file structure:")?;
        for defect in &self.defects {
            write!(f, "\n  - {defect}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

const FIELDS: [&str; 2] = ["keyword", "prompt"];

/// Validate a parsed document and build the [`BatchSpec`] it describes.
///
/// Keys that are not batch names are ignored.
pub fn validate_document(document: &Value) -> Result<BatchSpec, ValidationErrors> {
    let Value::Object(root) = document else {
        return Err(ValidationErrors::single(Defect::RootNotMapping));
    };

    let mut discovered: Vec<(BatchName, &Value)> = root
        .iter()
        .filter_map(|(key, value)| BatchName::parse(key).map(|name| (name, value)))
        .collect();
    if discovered.is_empty() {
        return Err(ValidationErrors::single(Defect::NoBatches));
    }
    discovered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut defects = Vec::new();
    let mut batches = Vec::with_capacity(discovered.len());

    for (name, value) in discovered {
        let batch = name.to_string();
        let Value::Array(entries) = value else {
            defects.push(Defect::BatchNotList { batch });
            continue;
        };
        if entries.is_empty() {
            defects.push(Defect::EmptyBatch { batch });
            continue;
        }

        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let Value::Object(fields) = entry else {
                defects.push(Defect::ItemNotMapping { batch: batch.clone(), index });
                continue;
            };
            if let Some(item) = validate_item(fields, &batch, index, &mut defects) {
                items.push(item);
            }
        }

        if defects.is_empty() {
            batches.push(Batch::new(name, items)?);
        }
    }

    if !defects.is_empty() {
        return Err(ValidationErrors { defects });
    }
    BatchSpec::new(batches)
}

fn validate_item(
    fields: &Map<String, Value>,
    batch: &str,
    index: usize,
    defects: &mut Vec<Defect>,
) -> Option<GenerationRequest> {
    let mut values = [None, None];
    for (slot, field) in values.iter_mut().zip(FIELDS) {
        match fields.get(field) {
            None | Some(Value::Null) => {
                defects.push(Defect::MissingField { batch: batch.to_string(), index, field });
            }
            Some(Value::String(text)) if text.trim().is_empty() => {
                defects.push(Defect::MissingField { batch: batch.to_string(), index, field });
            }
            Some(Value::String(text)) => *slot = Some(text.clone()),
            Some(other) => defects.push(Defect::WrongFieldType {
                batch: batch.to_string(),
                index,
                field,
                found: json_type_name(other),
            }),
        }
    }

    let [Some(keyword), Some(prompt)] = values else {
        return None;
    };
    Some(GenerationRequest { keyword, prompt })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

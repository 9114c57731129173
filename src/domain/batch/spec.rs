use serde_json::{Map, Value};

use crate::domain::GenerationRequest;
use crate::domain::batch::{BatchName, Defect, ValidationErrors};

/// A named, ordered, non-empty group of generation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    name: BatchName,
    items: Vec<GenerationRequest>,
}

impl Batch {
    pub fn new(name: BatchName, items: Vec<GenerationRequest>) -> Result<Self, ValidationErrors> {
        if items.is_empty() {
            return Err(ValidationErrors::single(Defect::EmptyBatch { batch: name.to_string() }));
        }
        Ok(Self { name, items })
    }

    pub fn name(&self) -> &BatchName {
        &self.name
    }

    pub fn items(&self) -> &[GenerationRequest] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Validated batch input, held in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSpec {
    batches: Vec<Batch>,
}

impl BatchSpec {
    pub fn new(mut batches: Vec<Batch>) -> Result<Self, ValidationErrors> {
        if batches.is_empty() {
            return Err(ValidationErrors::single(Defect::NoBatches));
        }
        batches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { batches })
    }

    /// Batches in ascending suffix order.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn total_items(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }

    /// Render back into the document shape accepted by the loader.
    pub fn to_document(&self) -> Value {
        let mut root = Map::new();
        for batch in &self.batches {
            let items = batch
                .items
                .iter()
                .map(|item| {
                    let mut entry = Map::new();
                    entry.insert("keyword".to_string(), Value::String(item.keyword.clone()));
                    entry.insert("prompt".to_string(), Value::String(item.prompt.clone()));
                    Value::Object(entry)
                })
                .collect();
            root.insert(batch.name.to_string(), Value::Array(items));
        }
        Value::Object(root)
    }
}

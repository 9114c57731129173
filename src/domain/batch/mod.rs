pub mod name;
pub mod spec;
pub mod validation;

pub use name::BatchName;
pub use spec::{Batch, BatchSpec};
pub use validation::{Defect, ValidationErrors, validate_document};

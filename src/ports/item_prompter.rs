use crate::domain::AppError;

/// Port for line-oriented user input.
pub trait ItemPrompter {
    /// Ask `label` and return the raw answer.
    fn ask(&self, label: &str) -> Result<String, AppError>;

    /// Show a notice to the user.
    fn notify(&self, message: &str);
}

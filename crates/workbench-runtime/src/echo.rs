//! Echo backend
//!
//! Performs no computation; reports what it was asked to process. This is
//! the default backend, so an adapter is always callable even with no real
//! model configured.

use tracing::debug;
use workbench_core::WorkbenchResult;

use crate::traits::{ModelBackend, ModelOutput};

/// Backend that echoes its input
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoBackend;

impl EchoBackend {
    /// Create a new echo backend
    pub fn new() -> Self {
        Self
    }
}

impl ModelBackend for EchoBackend {
    fn run_model(&self, model_name: &str, input: &str) -> WorkbenchResult<ModelOutput> {
        debug!(model = model_name, input_len = input.len(), "Echo backend invoked");
        Ok(ModelOutput::Text(format!(
            "[{}] {} processed: {}",
            self.name(),
            model_name,
            input
        )))
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_output() {
        let backend = EchoBackend::new();
        let output = backend.run_model("TestModel", "hello").unwrap();
        assert_eq!(
            output,
            ModelOutput::Text("[echo] TestModel processed: hello".to_string())
        );
    }

    #[test]
    fn test_echo_is_deterministic() {
        let backend = EchoBackend::new();
        let first = backend.run_model("m", "same input").unwrap();
        let second = backend.run_model("m", "same input").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_echo_accepts_empty_input() {
        let output = EchoBackend.run_model("m", "").unwrap();
        assert_eq!(output.to_string(), "[echo] m processed: ");
    }
}

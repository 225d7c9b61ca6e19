//! Backend trait definitions

use serde::{Deserialize, Serialize};
use workbench_core::WorkbenchResult;

/// A model implementation the adapter can delegate to
pub trait ModelBackend: Send + Sync {
    /// Run the model for `input` on behalf of the adapter named `model_name`
    fn run_model(&self, model_name: &str, input: &str) -> WorkbenchResult<ModelOutput>;

    /// Get the backend name
    fn name(&self) -> &'static str;
}

/// External text-classification capability
pub trait TextClassifier: Send + Sync {
    /// Score `text`, returning one or more labels
    fn classify(&self, text: &str) -> WorkbenchResult<Vec<Classification>>;
}

/// A label with its confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Result of a model run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ModelOutput {
    /// Free-form text
    Text(String),
    /// Classification labels, highest score first
    Labels(Vec<Classification>),
}

impl ModelOutput {
    /// Highest scoring label, if this is a classification result
    pub fn top_label(&self) -> Option<&Classification> {
        match self {
            ModelOutput::Labels(labels) => labels.first(),
            ModelOutput::Text(_) => None,
        }
    }
}

impl std::fmt::Display for ModelOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelOutput::Text(text) => write!(f, "{}", text),
            ModelOutput::Labels(labels) => {
                let parts: Vec<String> = labels
                    .iter()
                    .map(|c| format!("{} ({:.4})", c.label, c.score))
                    .collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_display() {
        let text = ModelOutput::Text("done".to_string());
        assert_eq!(text.to_string(), "done");
        assert!(text.top_label().is_none());

        let labels = ModelOutput::Labels(vec![
            Classification {
                label: "POSITIVE".to_string(),
                score: 0.99987,
            },
            Classification {
                label: "NEGATIVE".to_string(),
                score: 0.00013,
            },
        ]);
        assert_eq!(labels.to_string(), "POSITIVE (0.9999), NEGATIVE (0.0001)");
        assert_eq!(labels.top_label().unwrap().label, "POSITIVE");
    }

    #[test]
    fn test_output_serialize() {
        let output = ModelOutput::Text("hi".to_string());
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "value": "hi"}));
    }
}

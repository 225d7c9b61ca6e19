//! Text-classification backend
//!
//! Delegates to an external [`TextClassifier`]. Any failure of the
//! classifier is reported as [`WorkbenchError::Inference`].

use std::cmp::Ordering;
use tracing::{debug, error};
use workbench_core::{WorkbenchError, WorkbenchResult};

use crate::traits::{ModelBackend, ModelOutput, TextClassifier};

/// Backend that labels text with an external classifier
pub struct ClassificationBackend {
    classifier: Box<dyn TextClassifier>,
}

impl ClassificationBackend {
    /// Create a backend around a loaded classifier
    pub fn new(classifier: Box<dyn TextClassifier>) -> Self {
        Self { classifier }
    }
}

impl ModelBackend for ClassificationBackend {
    fn run_model(&self, model_name: &str, input: &str) -> WorkbenchResult<ModelOutput> {
        debug!(model = model_name, input_len = input.len(), "Classifying text");

        let mut labels = self.classifier.classify(input).map_err(|e| {
            error!(model = model_name, error = %e, "Classifier failed");
            match e {
                WorkbenchError::Inference(_) => e,
                other => WorkbenchError::Inference(other.to_string()),
            }
        })?;

        if labels.is_empty() {
            return Err(WorkbenchError::Inference(format!(
                "{} returned no labels",
                model_name
            )));
        }

        labels.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        Ok(ModelOutput::Labels(labels))
    }

    fn name(&self) -> &'static str {
        "classification"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Classification;

    struct FixedClassifier(Vec<Classification>);

    impl TextClassifier for FixedClassifier {
        fn classify(&self, _text: &str) -> WorkbenchResult<Vec<Classification>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenClassifier;

    impl TextClassifier for BrokenClassifier {
        fn classify(&self, _text: &str) -> WorkbenchResult<Vec<Classification>> {
            Err(WorkbenchError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "model weights missing",
            )))
        }
    }

    fn label(label: &str, score: f64) -> Classification {
        Classification {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_labels_sorted_by_score() {
        let backend = ClassificationBackend::new(Box::new(FixedClassifier(vec![
            label("NEGATIVE", 0.1),
            label("POSITIVE", 0.9),
        ])));

        let output = backend.run_model("Sentiment", "I love it").unwrap();
        assert_eq!(output.top_label().unwrap().label, "POSITIVE");
        assert_eq!(backend.name(), "classification");
    }

    #[test]
    fn test_classifier_error_becomes_inference_error() {
        let backend = ClassificationBackend::new(Box::new(BrokenClassifier));
        match backend.run_model("Sentiment", "text") {
            Err(WorkbenchError::Inference(msg)) => assert!(msg.contains("model weights missing")),
            other => panic!("expected inference error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_labels_is_inference_error() {
        let backend = ClassificationBackend::new(Box::new(FixedClassifier(Vec::new())));
        assert!(matches!(
            backend.run_model("Sentiment", "text"),
            Err(WorkbenchError::Inference(_))
        ));
    }
}

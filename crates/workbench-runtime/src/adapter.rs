//! Inference adapter
//!
//! The uniform entry point callers use to run a model. The backend is chosen
//! once at construction; callers only ever see [`InferenceAdapter::run_model`].

use tracing::{debug, info};
use workbench_core::{
    measure, BackendKind, InferenceConfig, Measured, WorkbenchError, WorkbenchResult,
};

use crate::classify::ClassificationBackend;
use crate::echo::EchoBackend;
use crate::http::HttpClassifier;
use crate::traits::{ModelBackend, ModelOutput};

const DEFAULT_VERSION: &str = "1.0";

/// Named wrapper around a model backend
pub struct InferenceAdapter {
    /// Adapter label
    name: String,
    /// Adapter version
    version: String,
    /// Backend performing the work
    backend: Box<dyn ModelBackend>,
}

impl InferenceAdapter {
    /// Create an adapter around `backend`
    pub fn new(name: impl Into<String>, backend: Box<dyn ModelBackend>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            backend,
        }
    }

    /// Create an adapter with the echo backend
    pub fn echo(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(EchoBackend::new()))
    }

    /// Set the adapter version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Build the adapter described by `config`
    ///
    /// The classification backend requires an endpoint and a non-zero timeout.
    pub fn from_config(config: &InferenceConfig) -> WorkbenchResult<Self> {
        let backend: Box<dyn ModelBackend> = match config.backend {
            BackendKind::Echo => Box::new(EchoBackend::new()),
            BackendKind::Classification => {
                let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                    WorkbenchError::Config(
                        "classification backend requires an endpoint".to_string(),
                    )
                })?;

                if config.timeout_secs == 0 {
                    return Err(WorkbenchError::Config(
                        "timeout_secs must be greater than zero".to_string(),
                    ));
                }

                let mut classifier = HttpClassifier::new(endpoint, config.timeout_secs)?;
                if let Some(token) = &config.api_token {
                    classifier = classifier.with_api_token(token);
                }
                Box::new(ClassificationBackend::new(Box::new(classifier)))
            }
        };

        let adapter = Self::new(config.name.clone(), backend).with_version(config.version.clone());
        info!(
            name = %adapter.name,
            version = %adapter.version,
            backend = adapter.backend_name(),
            "Inference adapter ready"
        );
        Ok(adapter)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Name of the selected backend
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// One-line description of the adapter
    pub fn info(&self) -> String {
        format!(
            "InferenceAdapter: {} v{} ({})",
            self.name,
            self.version,
            self.backend_name()
        )
    }

    /// Run the model on `input`
    pub fn run_model(&self, input: &str) -> WorkbenchResult<ModelOutput> {
        debug!(
            name = %self.name,
            backend = self.backend_name(),
            input_len = input.len(),
            "Running model"
        );
        self.backend.run_model(&self.name, input)
    }

    /// Run the model, timing it and turning a backend panic into an error
    pub fn run_model_measured(&self, input: &str) -> Measured<ModelOutput> {
        measure("run_model", || self.run_model(input))
    }
}

impl std::fmt::Debug for InferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceAdapter")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("backend", &self.backend_name())
            .finish()
    }
}

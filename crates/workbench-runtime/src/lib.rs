//! workbench-runtime: Model backends and the inference adapter
//!
//! This crate provides:
//! - The `ModelBackend` and `TextClassifier` traits
//! - An echo backend and a text-classification backend
//! - An HTTP classifier for Hugging Face style inference endpoints
//! - `InferenceAdapter`, the uniform entry point for running a model

pub mod adapter;
pub mod classify;
pub mod echo;
pub mod http;
pub mod traits;

pub use adapter::InferenceAdapter;
pub use classify::ClassificationBackend;
pub use echo::EchoBackend;
pub use http::HttpClassifier;
pub use traits::{Classification, ModelBackend, ModelOutput, TextClassifier};

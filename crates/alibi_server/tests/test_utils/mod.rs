//! Mock drivers for pipeline tests.

use alibi_core::{GeneratedImage, Headshot};
use alibi_error::{AlibiResult, GenerationError, GenerationErrorKind};
use alibi_interface::{ExcuseDriver, ImageDriver};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given payload
    Success(String),
    /// Always return the specified error
    Error(GenerationErrorKind),
}

/// Mock excuse driver for testing.
///
/// Allows tests to control the raw payload (or failure) and verify pipeline
/// behavior without making actual API calls.
pub struct MockExcuseDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
}

impl MockExcuseDriver {
    /// Create a mock that always succeeds with the given payload text.
    pub fn new_success(payload: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(payload.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock that always fails with the given error.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(error),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ExcuseDriver for MockExcuseDriver {
    async fn generate(&self, _prompt: &str) -> AlibiResult<String> {
        *self.call_count.lock().unwrap() += 1;
        match &self.behavior {
            MockBehavior::Success(payload) => Ok(payload.clone()),
            MockBehavior::Error(kind) => Err(GenerationError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-excuses"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock image driver for testing.
pub struct MockImageDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    saw_headshot: Arc<Mutex<bool>>,
}

impl MockImageDriver {
    /// Create a mock that always succeeds with the given base64 payload.
    pub fn new_success(base64: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(base64.into()),
            call_count: Arc::new(Mutex::new(0)),
            saw_headshot: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a mock that always fails with the given error.
    #[allow(dead_code)]
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(error),
            call_count: Arc::new(Mutex::new(0)),
            saw_headshot: Arc::new(Mutex::new(false)),
        }
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Whether the last call carried a headshot reference.
    pub fn saw_headshot(&self) -> bool {
        *self.saw_headshot.lock().unwrap()
    }
}

#[async_trait]
impl ImageDriver for MockImageDriver {
    async fn generate(
        &self,
        _prompt: &str,
        headshot: Option<&Headshot>,
    ) -> AlibiResult<GeneratedImage> {
        *self.call_count.lock().unwrap() += 1;
        *self.saw_headshot.lock().unwrap() = headshot.is_some();
        match &self.behavior {
            MockBehavior::Success(base64) => Ok(GeneratedImage {
                mime_type: "image/png".to_string(),
                base64: base64.clone(),
            }),
            MockBehavior::Error(kind) => Err(GenerationError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-images"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

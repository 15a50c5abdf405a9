//! Mock implementation of SmsSender for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use super::traits::SmsSender;

/// In-memory SMS sender for tests
///
/// Records the last code handed over for each phone, including attempts
/// that then fail, so tests can read back what would have been
/// delivered.
pub struct MockSmsSender {
    sent: Arc<Mutex<HashMap<String, String>>>,
    send_count: AtomicUsize,
    should_fail: bool,
}

impl MockSmsSender {
    /// Create a mock sender whose sends succeed
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(HashMap::new())),
            send_count: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    /// Create a mock sender whose sends fail with a provider error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// The last code handed to the provider for a phone
    pub fn sent_code(&self, phone: &str) -> Option<String> {
        self.sent.lock().unwrap().get(phone).cloned()
    }

    /// Number of send attempts observed
    pub fn send_count(&self) -> usize {
        self.send_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.send_count.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .insert(phone.to_string(), code.to_string());

        if self.should_fail {
            return Err("mock provider rejected the message".to_string());
        }

        Ok(format!("mock-sms-{}", Uuid::new_v4()))
    }
}

//! Shared fixtures for integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fpcore::Deferred;

/// Records what a fake asynchronous prompt did, in order
#[derive(Debug, Default)]
pub struct PromptLog {
    pub asked: AtomicUsize,
    pub events: Mutex<Vec<String>>,
}

impl PromptLog {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

/// A prompt that answers with a fresh value each time it is asked
pub fn question(message: &'static str, log: Arc<PromptLog>) -> Deferred<String> {
    Deferred::new(move || {
        let log = Arc::clone(&log);
        async move {
            let n = log.asked.fetch_add(1, Ordering::SeqCst) + 1;
            log.events.lock().unwrap().push(format!("ask {} #{}", message, n));
            tokio::time::sleep(Duration::from_millis(2)).await;
            log.events.lock().unwrap().push(format!("answer #{}", n));
            Ok(format!("answer {}", n))
        }
    })
}

//! Minimum-interval gating for the geocoding endpoints
//!
//! The upstream geocoder rejects bursts well below the documented rate
//! limits, so calls to each geocoding path are spaced at least 300ms
//! apart. Spacing is tracked per endpoint path and shared process-wide
//! by default; tests inject their own gate to stay isolated.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use tokio::time::Instant;

/// Default spacing between calls to the same throttled endpoint.
pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(300);

static GLOBAL_GATE: OnceLock<ThrottleGate> = OnceLock::new();

/// Spaces requests to a set of endpoint paths by a minimum interval.
///
/// Cloning is cheap and clones share the same spacing state. The check
/// and the sleep are deliberately not atomic: two tasks that race the
/// same path may both pass, which matches how callers of a remote rate
/// limit actually behave and avoids serializing unrelated requests
/// behind a held lock.
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    min_interval: Duration,
    last_request: Arc<Mutex<HashMap<String, Instant>>>,
}

impl ThrottleGate {
    /// Create an isolated gate with the given minimum interval.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The process-wide gate used by default, spacing at 300ms.
    pub fn global() -> &'static ThrottleGate {
        GLOBAL_GATE.get_or_init(|| ThrottleGate::new(MIN_REQUEST_INTERVAL))
    }

    /// Wait until at least the minimum interval has passed since the
    /// previous call for `path`, then record the current time.
    ///
    /// The first call for a path never waits. Different paths never
    /// delay each other.
    pub async fn acquire(&self, path: &str) {
        let delay = {
            let mut last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());
            let now = Instant::now();
            let delay = last
                .get(path)
                .map(|prev| self.min_interval.saturating_sub(now - *prev))
                .unwrap_or(Duration::ZERO);
            last.insert(path.to_string(), now + delay);
            delay
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for ThrottleGate {
    fn default() -> Self {
        Self::new(MIN_REQUEST_INTERVAL)
    }
}

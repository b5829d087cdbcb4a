//! Throttle gate timing tests under a paused tokio clock

use std::time::Duration;

use ors_http::{ThrottleGate, MIN_REQUEST_INTERVAL};
use tokio::time::Instant;

const SEARCH: &str = "/geocode/search";
const REVERSE: &str = "/geocode/reverse";

#[tokio::test(start_paused = true)]
async fn test_first_call_is_not_delayed() {
    let gate = ThrottleGate::default();

    let start = Instant::now();
    gate.acquire(SEARCH).await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_back_to_back_calls_are_spaced() {
    let gate = ThrottleGate::default();

    let start = Instant::now();
    gate.acquire(SEARCH).await;
    gate.acquire(SEARCH).await;

    assert_eq!(start.elapsed(), MIN_REQUEST_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_spacing_accumulates_across_a_burst() {
    let gate = ThrottleGate::default();

    let start = Instant::now();
    for _ in 0..4 {
        gate.acquire(SEARCH).await;
    }

    assert_eq!(start.elapsed(), 3 * MIN_REQUEST_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_interval_clears_the_delay() {
    let gate = ThrottleGate::default();

    gate.acquire(SEARCH).await;
    tokio::time::sleep(MIN_REQUEST_INTERVAL).await;

    let start = Instant::now();
    gate.acquire(SEARCH).await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_paths_are_throttled_independently() {
    let gate = ThrottleGate::default();

    let start = Instant::now();
    gate.acquire(SEARCH).await;
    gate.acquire(REVERSE).await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_spacing_state() {
    let gate = ThrottleGate::default();
    let other = gate.clone();

    let start = Instant::now();
    gate.acquire(SEARCH).await;
    other.acquire(SEARCH).await;

    assert_eq!(start.elapsed(), MIN_REQUEST_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_custom_interval_is_honored() {
    let gate = ThrottleGate::new(Duration::from_millis(50));

    let start = Instant::now();
    gate.acquire(SEARCH).await;
    gate.acquire(SEARCH).await;

    assert_eq!(start.elapsed(), Duration::from_millis(50));
}

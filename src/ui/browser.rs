//! Browser helpers for the simulated auth flow
//!
//! Blocking alerts and the artificial network delay. On the server both are
//! no-ops; event handlers never run there.

use crate::core::SIMULATED_LATENCY_MS;

/// Show a blocking `window.alert` with the given message
#[cfg(not(feature = "ssr"))]
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                leptos::logging::warn!("Failed to show alert: {}", message);
            }
        }
        None => leptos::logging::warn!("No window available for alert: {}", message),
    }
}

/// Wait out the fixed delay that stands in for a network request
#[cfg(not(feature = "ssr"))]
pub async fn simulate_latency() {
    gloo_timers::future::TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
}

/// SSR stubs
#[cfg(feature = "ssr")]
pub fn alert(message: &str) {
    tracing::debug!("alert suppressed on server: {}", message);
}

#[cfg(feature = "ssr")]
pub async fn simulate_latency() {
    let _ = SIMULATED_LATENCY_MS;
}

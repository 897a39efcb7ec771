//! Platform Timing Utilities
//!
//! Cross-target sleeping for delayed UI actions. Browser builds wait through
//! the JS event loop; native builds (where the test suite runs) wait on tokio.

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::{sleep, Duration};

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    sleep(Duration::from_millis(ms as u64)).await;
}

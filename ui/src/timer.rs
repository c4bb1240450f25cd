use std::time::Duration;

pub trait Delay {
    async fn delay(&self, duration: Duration);
}

/// Wall-clock delay: browser timers on wasm, tokio elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer;

impl Delay for Timer {
    async fn delay(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;

        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }
}

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use super::traits::Delay;

/// Espera basada en `setTimeout`; soltar el future cancela el timer
#[derive(Clone, Copy, Default)]
pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn wait(&self, duration_ms: u32) {
        TimeoutFuture::new(duration_ms).await;
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::domain::a001_sourced_product::{
    MockOfferSynthesizer, OfferSynthesizer, SourcedProduct, SourcingError, SourcingPrompt,
};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Handle to one in-flight sourcing request.
///
/// ```ignore
/// let task = SourcingTask::spawn(prompt, 3000, move |result| { ... });
/// task.cancel();
/// ```
#[derive(Clone, Debug, Default)]
pub struct SourcingTask {
    cancelled: Arc<AtomicBool>,
}

impl SourcingTask {
    /// Waits `delay_ms`, then hands the synthesized offer to `on_done`.
    /// A cancelled task reports `SourcingError::Cancelled` instead.
    pub fn spawn<F>(prompt: SourcingPrompt, delay_ms: u32, on_done: F) -> Self
    where
        F: FnOnce(Result<SourcedProduct, SourcingError>) + 'static,
    {
        let task = Self::default();
        let handle = task.clone();

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let mut synthesizer = MockOfferSynthesizer::new(rand::thread_rng());
            on_done(handle.finish(&mut synthesizer, &prompt));
        });

        task
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn finish<S: OfferSynthesizer>(
        &self,
        synthesizer: &mut S,
        prompt: &SourcingPrompt,
    ) -> Result<SourcedProduct, SourcingError> {
        if self.is_cancelled() {
            return Err(SourcingError::Cancelled);
        }
        synthesizer.synthesize(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cancelled_task_yields_cancelled() {
        let task = SourcingTask::default();
        let clone = task.clone();
        clone.cancel();

        let mut synth = MockOfferSynthesizer::new(StdRng::seed_from_u64(5));
        let prompt = SourcingPrompt::parse("bamboo toothbrushes").unwrap();
        assert!(task.is_cancelled());
        assert_eq!(task.finish(&mut synth, &prompt), Err(SourcingError::Cancelled));
    }

    #[test]
    fn test_live_task_synthesizes() {
        let task = SourcingTask::default();
        let mut synth = MockOfferSynthesizer::new(StdRng::seed_from_u64(5));
        let prompt = SourcingPrompt::parse("bamboo toothbrushes").unwrap();

        let offer = task.finish(&mut synth, &prompt).unwrap();
        assert_eq!(offer.title, "AI Sourced: bamboo toothbrushes...");
    }
}

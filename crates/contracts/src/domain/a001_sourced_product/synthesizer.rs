use rand::Rng;
use thiserror::Error;

use super::aggregate::{SourcedProduct, SourcedProductId, SourcingPrompt};
use crate::enums::SourcingStatus;

pub const TITLE_PREFIX_CHARS: usize = 50;
pub const MOCK_SUPPLIER: &str = "Verified Global Supplier";
pub const MOCK_DELIVERY: &str = "5-7 business days";
/// Fixed processing time of a sourcing request
pub const SOURCING_DELAY_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourcingError {
    #[error("Describe what you need before sourcing")]
    EmptyPrompt,
    #[error("Sourcing request was cancelled")]
    Cancelled,
}

/// Turns a prompt into a supplier offer
pub trait OfferSynthesizer {
    fn synthesize(&mut self, prompt: &SourcingPrompt) -> Result<SourcedProduct, SourcingError>;
}

/// Fabricates offers from random numbers; never fails
pub struct MockOfferSynthesizer<R: Rng> {
    rng: R,
}

impl<R: Rng> MockOfferSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OfferSynthesizer for MockOfferSynthesizer<R> {
    fn synthesize(&mut self, prompt: &SourcingPrompt) -> Result<SourcedProduct, SourcingError> {
        Ok(SourcedProduct {
            id: SourcedProductId::new_v4(),
            title: format!("AI Sourced: {}...", prompt.head(TITLE_PREFIX_CHARS)),
            description: format!(
                "Premium quality product matching your request: \"{}\"",
                prompt.as_str()
            ),
            price: self.rng.gen_range(50..=549),
            supplier: MOCK_SUPPLIER.to_string(),
            estimated_delivery: MOCK_DELIVERY.to_string(),
            status: SourcingStatus::Found,
            confidence: self.rng.gen_range(80..=99),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sourced_product::SourcingFeed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_synthesized_offer_shape() {
        let mut synth = MockOfferSynthesizer::new(StdRng::seed_from_u64(7));
        let prompt = SourcingPrompt::parse("Organic cotton t-shirts").unwrap();
        let offer = synth.synthesize(&prompt).unwrap();

        assert_eq!(offer.title, "AI Sourced: Organic cotton t-shirts...");
        assert_eq!(
            offer.description,
            "Premium quality product matching your request: \"Organic cotton t-shirts\""
        );
        assert_eq!(offer.supplier, "Verified Global Supplier");
        assert_eq!(offer.estimated_delivery, "5-7 business days");
        assert_eq!(offer.status, SourcingStatus::Found);
    }

    #[test]
    fn test_random_values_stay_in_range() {
        let mut synth = MockOfferSynthesizer::new(StdRng::seed_from_u64(42));
        let prompt = SourcingPrompt::parse("desk lamp").unwrap();
        for _ in 0..500 {
            let offer = synth.synthesize(&prompt).unwrap();
            assert!((50..=549).contains(&offer.price), "price {}", offer.price);
            assert!((80..=99).contains(&offer.confidence), "confidence {}", offer.confidence);
        }
    }

    #[test]
    fn test_long_prompt_title_is_cut_at_fifty_chars() {
        let mut synth = MockOfferSynthesizer::new(StdRng::seed_from_u64(1));
        let text = "x".repeat(80);
        let offer = synth.synthesize(&SourcingPrompt::parse(&text).unwrap()).unwrap();
        assert_eq!(offer.title, format!("AI Sourced: {}...", "x".repeat(50)));
    }

    #[test]
    fn test_each_submission_prepends_exactly_one() {
        let mut synth = MockOfferSynthesizer::new(StdRng::seed_from_u64(3));
        let mut feed = SourcingFeed::new();

        let first = synth.synthesize(&SourcingPrompt::parse("chairs").unwrap()).unwrap();
        feed.prepend(first.clone());
        let second = synth.synthesize(&SourcingPrompt::parse("tables").unwrap()).unwrap();
        feed.prepend(second.clone());

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.items()[0], second);
        assert_eq!(feed.items()[1], first);
        assert_ne!(first.id, second.id);
    }
}

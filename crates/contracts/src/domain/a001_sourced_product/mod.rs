pub mod aggregate;
pub mod synthesizer;

pub use aggregate::{SourcedProduct, SourcedProductId, SourcingFeed, SourcingPrompt};
pub use synthesizer::{MockOfferSynthesizer, OfferSynthesizer, SourcingError, SOURCING_DELAY_MS};

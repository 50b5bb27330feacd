use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::synthesizer::SourcingError;
use crate::enums::SourcingStatus;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcedProductId(pub Uuid);

impl SourcedProductId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Prompt
// ============================================================================

/// Free-text sourcing request that is known to contain something other
/// than whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcingPrompt(String);

impl SourcingPrompt {
    /// Keeps the text as typed; only the emptiness check trims
    pub fn parse(text: &str) -> Result<Self, SourcingError> {
        if text.trim().is_empty() {
            return Err(SourcingError::EmptyPrompt);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading `max_chars` characters, cut on a char boundary
    pub fn head(&self, max_chars: usize) -> &str {
        match self.0.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Offer synthesized for a sourcing prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedProduct {
    pub id: SourcedProductId,
    pub title: String,
    pub description: String,
    /// Whole dollars
    pub price: u32,
    pub supplier: String,
    #[serde(rename = "estimatedDelivery")]
    pub estimated_delivery: String,
    pub status: SourcingStatus,
    /// Match confidence in percent
    pub confidence: u8,
}

// ============================================================================
// Feed
// ============================================================================

/// Results shown on the sourcing page, newest first.
///
/// Items are never edited or removed; the feed lives as long as the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcingFeed {
    items: Vec<SourcedProduct>,
}

impl SourcingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, product: SourcedProduct) {
        self.items.insert(0, product);
    }

    pub fn items(&self) -> &[SourcedProduct] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompts_are_rejected() {
        assert_eq!(SourcingPrompt::parse(""), Err(SourcingError::EmptyPrompt));
        assert_eq!(SourcingPrompt::parse("   \n\t"), Err(SourcingError::EmptyPrompt));
        assert!(SourcingPrompt::parse(" chairs ").is_ok());
        assert_eq!(SourcingPrompt::parse(" chairs ").unwrap().as_str(), " chairs ");
    }

    #[test]
    fn test_head_respects_char_boundaries() {
        let prompt = SourcingPrompt::parse("наушники с шумоподавлением").unwrap();
        assert_eq!(prompt.head(8), "наушники");
        assert_eq!(prompt.head(500), prompt.as_str());
    }
}

//! Hot-swappable rate card
//!
//! Readers take an `Arc` snapshot once per quote and never see a card
//! change underneath them. Writers validate first and swap the whole card
//! in one step.

use crate::error::RateCardError;
use crate::rate_card::RateCard;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug)]
pub struct RateCardStore {
    current: RwLock<Arc<RateCard>>,
    generation: AtomicU64,
}

impl RateCardStore {
    pub fn new(card: RateCard) -> Result<Self, RateCardError> {
        card.validate()?;
        Ok(Self {
            current: RwLock::new(Arc::new(card)),
            generation: AtomicU64::new(1),
        })
    }

    pub fn standard() -> Self {
        Self {
            current: RwLock::new(Arc::new(RateCard::standard())),
            generation: AtomicU64::new(1),
        }
    }

    /// Current card. Cheap: clones an `Arc`.
    pub fn snapshot(&self) -> Arc<RateCard> {
        Arc::clone(&self.current.read())
    }

    /// Validate and install `card`, returning the new generation. An
    /// invalid card leaves the current one in place.
    pub fn replace(&self, card: RateCard) -> Result<u64, RateCardError> {
        if let Err(err) = card.validate() {
            tracing::warn!(error = %err, "rejected rate card");
            return Err(err);
        }

        let mut current = self.current.write();
        *current = Arc::new(card);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        drop(current);

        tracing::info!(generation, "rate card replaced");
        Ok(generation)
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

impl Default for RateCardStore {
    fn default() -> Self {
        Self::standard()
    }
}

//! Stage Trait: one contract for every pipeline step
use crate::context::QuoteContext;
use crate::error::ShippingError;

/// A single step of the quote pipeline.
///
/// Stages take the working state by value and hand it back enriched. The
/// first error stops the pipeline; nothing partial is returned.
pub trait Stage<S>: Send + Sync {
    /// Unique stage id (ex: "zone.resolve.v1")
    fn id(&self) -> &'static str;

    /// Whether identical input always yields identical output (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    fn run(&self, state: S, ctx: &QuoteContext) -> Result<S, ShippingError>;
}

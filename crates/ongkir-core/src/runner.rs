//! Pipeline Runner: chains stages and records a proof per stage
use crate::context::QuoteContext;
use crate::error::ShippingError;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// What one stage did to the working state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProof {
    pub id: String,
    pub in_hash: String,
    pub out_hash: String,
    pub deterministic: bool,
    pub elapsed_us: u64,
}

pub struct PipelineRunner<S> {
    stages: Vec<Box<dyn Stage<S>>>,
    pipeline_id: String,
}

impl<S: Serialize> PipelineRunner<S> {
    pub fn new(stages: Vec<Box<dyn Stage<S>>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id().split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Run every stage in order. All-or-nothing: the first failing stage
    /// aborts the run and its error is returned as is.
    pub fn run(
        &self,
        input: S,
        ctx: &QuoteContext,
    ) -> Result<(S, Vec<StageProof>), ShippingError> {
        let span = tracing::debug_span!(
            "pipeline",
            pipeline = %self.pipeline_id,
            trace_id = %ctx.trace_id,
        );
        let _guard = span.enter();

        let mut current = input;
        let mut proofs = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let start = Instant::now();
            let in_hash = hash_state(stage.id(), &current)?;

            current = stage.run(current, ctx).map_err(|e| {
                tracing::debug!(stage = stage.id(), error = %e, "stage failed");
                e
            })?;

            let out_hash = hash_state(stage.id(), &current)?;
            let elapsed_us = start.elapsed().as_micros() as u64;
            tracing::debug!(stage = stage.id(), elapsed_us, "stage complete");

            proofs.push(StageProof {
                id: stage.id().to_string(),
                in_hash,
                out_hash,
                deterministic: stage.deterministic(),
                elapsed_us,
            });
        }

        Ok((current, proofs))
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// `blake3:<hex>` over the canonical JSON encoding of `value`.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(value)?;
    Ok(format!("blake3:{}", blake3::hash(&bytes)))
}

fn hash_state<S: Serialize>(stage: &str, state: &S) -> Result<String, ShippingError> {
    fingerprint(state).map_err(|e| ShippingError::stage(stage, format!("state not serializable: {e}")))
}

//! Unified Error Model
use thiserror::Error;

pub type ShippingResult<T> = Result<T, ShippingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingError {
    /// Parcel weight is zero, negative, or overflowed while summing items.
    #[error("WEIGHT/{grams}g: {reason}")]
    InvalidWeight { grams: i64, reason: String },

    /// Destination label is not in the zone table (exact match only).
    #[error("DESTINATION/unknown destination '{0}'")]
    UnknownDestination(String),

    /// A cost came out non-positive or overflowed. Always a bug in the
    /// rate card or the calculator, never a user error.
    #[error("PRICING/{courier}: {reason}")]
    Pricing { courier: String, reason: String },

    /// A stage ran without the state an earlier stage should have produced.
    #[error("STAGE/{stage}: {reason}")]
    Stage { stage: String, reason: String },

    #[error("RATE_CARD/{0}")]
    RateCard(String),
}

impl ShippingError {
    pub fn invalid_weight(grams: i64, reason: impl Into<String>) -> Self {
        Self::InvalidWeight {
            grams,
            reason: reason.into(),
        }
    }

    pub fn pricing(courier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pricing {
            courier: courier.into(),
            reason: reason.into(),
        }
    }

    pub fn stage(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Stable kind string used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidWeight { .. } => "InvalidWeight",
            Self::UnknownDestination(_) => "UnknownDestination",
            Self::Pricing { .. } => "Pricing",
            Self::Stage { .. } => "Stage",
            Self::RateCard(_) => "RateCard",
        }
    }

    /// Errors the caller can fix by changing the request.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidWeight { .. } | Self::UnknownDestination(_)
        )
    }
}

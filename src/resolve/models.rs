//! Outcome types for an excerpt invocation

use crate::error::ExcerptError;
use crate::wikipedia::Extract;

/// Where a single invocation ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Fetching,
    Disambiguating,
    NotFound,
    Resolved,
    ResolvedAfterDisambiguation,
    DisambiguationFailed,
    FetchFailed,
    InsertFailed,
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Idle | Self::Fetching | Self::Disambiguating)
    }
}

/// A resolved article, before formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub extract: Extract,
    /// Term derived from a disambiguation page, if one was followed
    pub candidate: Option<String>,
}

impl Resolution {
    pub fn state(&self) -> FlowState {
        if self.candidate.is_some() {
            FlowState::ResolvedAfterDisambiguation
        } else {
            FlowState::Resolved
        }
    }
}

/// Text that reached the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    pub resolution: Resolution,
}

/// Result of one invocation
#[derive(Debug)]
pub enum Outcome {
    Inserted(Insertion),
    Failed(ExcerptError),
    /// The prompt returned nothing; no fetch, no notice, no insert
    Cancelled,
}

impl Outcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    pub fn error(&self) -> Option<&ExcerptError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn state(&self) -> FlowState {
        match self {
            Self::Inserted(insertion) => insertion.resolution.state(),
            Self::Failed(ExcerptError::NotFound(_)) => FlowState::NotFound,
            Self::Failed(ExcerptError::DisambiguationUnresolved { .. }) => {
                FlowState::DisambiguationFailed
            }
            Self::Failed(ExcerptError::Io(_)) => FlowState::InsertFailed,
            Self::Failed(_) => FlowState::FetchFailed,
            Self::Cancelled => FlowState::Idle,
        }
    }
}

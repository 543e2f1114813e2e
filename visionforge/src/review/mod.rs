//! The per-stage review gate.
//!
//! Every stage attempt stops here before its output can enter the
//! run: the gate presents the candidate (or the failure notice in its
//! place), collects a [`ReviewDecision`], and moves through an
//! explicit [`GateState`] machine. An error on display can never be
//! promoted into an approved output.

mod reviewer;

pub use reviewer::{AutoApprove, FnReviewer, ReviewedAttempt, Reviewer, ScriptedReviewer};

use crate::stage::{StageName, StageOutcome};
use serde::{Deserialize, Serialize};

/// Where the gate stands for the stage under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// A candidate or failure notice is in front of the reviewer.
    Presenting,
    /// The reviewer asked for changes; the stage will be re-invoked.
    AwaitingRefinement,
    /// The displayed candidate became the stage's approved output.
    Approved,
    /// The reviewer stopped the run at this stage.
    Abandoned,
}

impl GateState {
    /// The state that follows `decision` while a candidate is on
    /// display. Decisions have no effect outside `Presenting`.
    #[must_use]
    pub fn after(self, decision: &ReviewDecision) -> Self {
        match (self, decision) {
            (Self::Presenting, ReviewDecision::Approve) => Self::Approved,
            (Self::Presenting, ReviewDecision::Refine { .. }) => Self::AwaitingRefinement,
            (Self::Presenting, ReviewDecision::Abandon) => Self::Abandoned,
            (state, _) => state,
        }
    }

    /// A re-invocation has produced a fresh candidate to display.
    #[must_use]
    pub const fn reopened(self) -> Self {
        match self {
            Self::AwaitingRefinement => Self::Presenting,
            state => state,
        }
    }

    /// Returns true once the gate has settled this stage.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Abandoned)
    }
}

/// The reviewer's verdict on one stage attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewDecision {
    /// Promote the displayed candidate into the run and move on.
    Approve,
    /// Re-invoke the stage with amended instructions.
    Refine {
        /// Free-text instructions appended to the stage prompt. Empty
        /// instructions re-run the same prompt unchanged.
        instructions: String,
    },
    /// Stop the run without a document.
    Abandon,
}

impl ReviewDecision {
    /// Decision that re-invokes the stage with the given instructions.
    #[must_use]
    pub fn refine(instructions: impl Into<String>) -> Self {
        Self::Refine {
            instructions: instructions.into(),
        }
    }

    /// Decision that re-runs the same prompt unchanged, the "try
    /// again" path after a rate limit.
    #[must_use]
    pub fn retry() -> Self {
        Self::Refine {
            instructions: String::new(),
        }
    }

    /// Returns true when the decision keeps the gate open on this
    /// stage.
    #[must_use]
    pub const fn reopens_stage(&self) -> bool {
        matches!(self, Self::Refine { .. })
    }
}

/// Everything a reviewer sees when a stage attempt is presented.
#[derive(Debug, Clone, Copy)]
pub struct ReviewContext<'a> {
    /// The stage under review.
    pub stage: StageName,
    /// 1-based attempt number for this stage.
    pub attempt: u32,
    /// What the attempt produced.
    pub outcome: &'a StageOutcome,
    /// The refinement instructions that shaped this attempt, if any.
    pub refinement: Option<&'a str>,
}

impl<'a> ReviewContext<'a> {
    /// Creates a context for a fresh attempt.
    #[must_use]
    pub const fn new(stage: StageName, attempt: u32, outcome: &'a StageOutcome) -> Self {
        Self {
            stage,
            attempt,
            outcome,
            refinement: None,
        }
    }

    /// Attaches the refinement that produced this attempt.
    #[must_use]
    pub const fn with_refinement(mut self, refinement: &'a str) -> Self {
        self.refinement = Some(refinement);
        self
    }

    /// The text on display: the candidate, or the failure notice.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.outcome.display_text()
    }

    /// Returns true for every attempt after the first.
    #[must_use]
    pub const fn is_retry(&self) -> bool {
        self.attempt > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_closes_the_gate() {
        let state = GateState::Presenting.after(&ReviewDecision::Approve);
        assert_eq!(state, GateState::Approved);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_refine_waits_then_reopens() {
        let state = GateState::Presenting.after(&ReviewDecision::refine("tighter scope"));
        assert_eq!(state, GateState::AwaitingRefinement);
        assert!(!state.is_terminal());
        assert_eq!(state.reopened(), GateState::Presenting);
    }

    #[test]
    fn test_abandon_is_terminal() {
        let state = GateState::Presenting.after(&ReviewDecision::Abandon);
        assert_eq!(state, GateState::Abandoned);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_terminal_states_absorb_decisions() {
        let approved = GateState::Approved;
        assert_eq!(approved.after(&ReviewDecision::Abandon), GateState::Approved);
        assert_eq!(approved.reopened(), GateState::Approved);

        let abandoned = GateState::Abandoned;
        assert_eq!(
            abandoned.after(&ReviewDecision::Approve),
            GateState::Abandoned
        );
    }

    #[test]
    fn test_retry_is_an_empty_refinement() {
        let decision = ReviewDecision::retry();
        assert_eq!(
            decision,
            ReviewDecision::Refine {
                instructions: String::new(),
            }
        );
        assert!(decision.reopens_stage());
        assert!(!ReviewDecision::Approve.reopens_stage());
    }

    #[test]
    fn test_context_reports_retries() {
        let outcome = StageOutcome::Generated("candidate".to_string());
        let first = ReviewContext::new(StageName::ProjectManager, 1, &outcome);
        assert!(!first.is_retry());
        assert_eq!(first.display_text(), "candidate");

        let second = ReviewContext::new(StageName::ProjectManager, 2, &outcome)
            .with_refinement("expand the stakeholder list");
        assert!(second.is_retry());
        assert_eq!(second.refinement, Some("expand the stakeholder list"));
    }
}

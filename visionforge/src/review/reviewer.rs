//! Reviewer trait and stock implementations.

use super::{ReviewContext, ReviewDecision};
use crate::stage::StageName;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// The human, or a scripted stand-in, at the review gate.
///
/// Implement this trait to put a terminal, web form, or chat surface
/// between the pipeline and its operator.
#[async_trait]
pub trait Reviewer: Send + Sync {
    /// Reviews one stage attempt and returns a decision.
    async fn review(&self, ctx: ReviewContext<'_>) -> ReviewDecision;
}

/// Approves every generated candidate without human input.
///
/// Failed attempts are abandoned rather than approved, so an
/// unattended run never promotes an error and never loops on a
/// failing provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

#[async_trait]
impl Reviewer for AutoApprove {
    async fn review(&self, ctx: ReviewContext<'_>) -> ReviewDecision {
        if ctx.outcome.is_generated() {
            ReviewDecision::Approve
        } else {
            ReviewDecision::Abandon
        }
    }
}

/// One attempt as a [`ScriptedReviewer`] saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewedAttempt {
    /// The stage under review.
    pub stage: StageName,
    /// 1-based attempt number.
    pub attempt: u32,
    /// The text on display, candidate or failure notice.
    pub displayed: String,
    /// Refinement that shaped the attempt, if any.
    pub refinement: Option<String>,
}

/// Replays a fixed queue of decisions and records what it saw.
#[derive(Debug)]
pub struct ScriptedReviewer {
    decisions: Mutex<VecDeque<ReviewDecision>>,
    fallback: ReviewDecision,
    seen: Mutex<Vec<ReviewedAttempt>>,
}

impl ScriptedReviewer {
    /// Creates a reviewer that replays `decisions` in order, then
    /// falls back to approving.
    #[must_use]
    pub fn new(decisions: Vec<ReviewDecision>) -> Self {
        Self {
            decisions: Mutex::new(decisions.into()),
            fallback: ReviewDecision::Approve,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Sets the decision used once the script is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, fallback: ReviewDecision) -> Self {
        self.fallback = fallback;
        self
    }

    /// Every attempt reviewed so far, in order.
    #[must_use]
    pub fn seen(&self) -> Vec<ReviewedAttempt> {
        self.seen.lock().clone()
    }
}

impl Default for ScriptedReviewer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl Reviewer for ScriptedReviewer {
    async fn review(&self, ctx: ReviewContext<'_>) -> ReviewDecision {
        self.seen.lock().push(ReviewedAttempt {
            stage: ctx.stage,
            attempt: ctx.attempt,
            displayed: ctx.display_text(),
            refinement: ctx.refinement.map(str::to_string),
        });
        self.decisions
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Adapts a closure into a reviewer.
pub struct FnReviewer<F>
where
    F: Fn(ReviewContext<'_>) -> ReviewDecision + Send + Sync,
{
    func: F,
}

impl<F> FnReviewer<F>
where
    F: Fn(ReviewContext<'_>) -> ReviewDecision + Send + Sync,
{
    /// Wraps the closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> Reviewer for FnReviewer<F>
where
    F: Fn(ReviewContext<'_>) -> ReviewDecision + Send + Sync,
{
    async fn review(&self, ctx: ReviewContext<'_>) -> ReviewDecision {
        (self.func)(ctx)
    }
}

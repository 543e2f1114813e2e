//! Pipeline orchestration.
//!
//! [`RequirementsPipeline`] owns the injected collaborators and drives
//! the four stages strictly in order, pausing at the review gate after
//! every generation call. Nothing here knows which provider is behind
//! the generator or who is behind the reviewer.

mod report;
mod state;

pub use report::{FinalDocument, RunReport, StageReport};
pub use state::PipelineState;

use crate::errors::{InputError, PipelineError};
use crate::generate::{GenerationRequest, TextGenerator, DEFAULT_MODEL};
use crate::progress::{NoOpProgress, ProgressSink};
use crate::review::{AutoApprove, GateState, ReviewContext, ReviewDecision, Reviewer};
use crate::stage::{StageDefinition, StageInvocation, StageName, StageOutcome};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Temperature used by callers that do not pick one: balanced,
/// slightly focused.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// The staged requirements pipeline.
///
/// Construction wires in the generator; the reviewer and progress
/// sink default to hands-off implementations.
pub struct RequirementsPipeline {
    generator: Arc<dyn TextGenerator>,
    reviewer: Arc<dyn Reviewer>,
    progress: Arc<dyn ProgressSink>,
    model: String,
}

impl RequirementsPipeline {
    /// Creates a pipeline over the given generator.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            reviewer: Arc::new(AutoApprove),
            progress: Arc::new(NoOpProgress),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Sets the reviewer consulted at each stage gate.
    #[must_use]
    pub fn with_reviewer(mut self, reviewer: Arc<dyn Reviewer>) -> Self {
        self.reviewer = reviewer;
        self
    }

    /// Sets the sink receiving stage progress messages.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the model identifier sent with every generation request.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Runs all four stages and returns the approved document.
    ///
    /// Each stage's candidate stops at the review gate; the stage is
    /// re-invoked with refinement instructions until the reviewer
    /// approves. No stage is skipped or reordered, and no unapproved
    /// text is ever returned.
    ///
    /// # Errors
    ///
    /// * [`PipelineError::Input`] when the description is blank.
    /// * [`PipelineError::Template`] when a stage prompt cannot be
    ///   rendered.
    /// * [`PipelineError::Halted`] when the reviewer stops a failing
    ///   stage.
    /// * [`PipelineError::Abandoned`] when the reviewer abandons the
    ///   run.
    pub async fn run(
        &self,
        project_description: &str,
        temperature: f32,
    ) -> Result<FinalDocument, PipelineError> {
        if project_description.trim().is_empty() {
            return Err(InputError::empty_description().into());
        }

        let run_start = Instant::now();
        let started_at = Utc::now();
        let mut state = PipelineState::new(project_description);
        let mut stage_reports = Vec::with_capacity(StageName::ALL.len());
        let mut text = String::new();

        info!(run_id = %state.run_id(), "Requirements run started");

        for stage in StageName::ALL {
            let definition = StageDefinition::of(stage);
            let stage_start = Instant::now();

            self.progress.notify(definition.progress_message);

            let (approved, attempts) = self.run_stage(&definition, &state, temperature).await?;
            let duration_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

            info!(
                stage = stage.as_str(),
                attempts, duration_ms, "Stage approved"
            );

            state.approve(stage, approved.clone());
            stage_reports.push(StageReport {
                stage,
                attempts,
                duration_ms,
            });
            // The loop ends on Documentation, so its approval leaves
            // the loop as the document text.
            text = approved;
        }

        let duration_ms = run_start.elapsed().as_secs_f64() * 1000.0;
        let report = RunReport {
            run_id: state.run_id(),
            started_at,
            finished_at: Utc::now(),
            duration_ms,
            stages: stage_reports,
        };

        info!(run_id = %report.run_id, duration_ms, "Requirements run finished");

        Ok(FinalDocument { text, report })
    }

    /// Drives one stage through the review gate until it settles.
    async fn run_stage(
        &self,
        definition: &StageDefinition,
        state: &PipelineState,
        temperature: f32,
    ) -> Result<(String, u32), PipelineError> {
        let stage = definition.name;
        let inputs = state.inputs_for(stage);
        let mut refinement: Option<String> = None;
        let mut attempts: u32 = 0;
        let mut gate = GateState::Presenting;

        let mut outcome = self
            .invoke(definition, &inputs, temperature, refinement.as_deref(), &mut attempts)
            .await?;

        while !gate.is_terminal() {
            let mut context = ReviewContext::new(stage, attempts, &outcome);
            if let Some(text) = refinement.as_deref() {
                context = context.with_refinement(text);
            }

            let decision = self.reviewer.review(context).await;
            gate = gate.after(&decision);

            if gate == GateState::AwaitingRefinement {
                if let ReviewDecision::Refine { instructions } = decision {
                    // Latest instructions win; an empty set means a
                    // plain retry of the base prompt.
                    refinement = Some(instructions);
                }
                outcome = self
                    .invoke(definition, &inputs, temperature, refinement.as_deref(), &mut attempts)
                    .await?;
                gate = gate.reopened();
            }
        }

        match (gate, outcome) {
            (GateState::Approved, StageOutcome::Generated(text)) => Ok((text, attempts)),
            // An error on display is never promoted, whatever the
            // decision was.
            (_, StageOutcome::Failed(source)) => Err(PipelineError::Halted { stage, source }),
            (_, StageOutcome::Generated(_)) => Err(PipelineError::Abandoned { stage }),
        }
    }

    /// Builds and fires one invocation, folding the result into an
    /// outcome for the gate.
    async fn invoke(
        &self,
        definition: &StageDefinition,
        inputs: &HashMap<String, String>,
        temperature: f32,
        refinement: Option<&str>,
        attempts: &mut u32,
    ) -> Result<StageOutcome, PipelineError> {
        let invocation = StageInvocation::build(definition, inputs, temperature, refinement)?;
        *attempts += 1;

        debug!(
            stage = definition.name.as_str(),
            attempt = *attempts,
            refined = invocation.refinement.as_deref().is_some_and(|text| !text.is_empty()),
            "Invoking stage"
        );

        let request = GenerationRequest::new(invocation.rendered_prompt, invocation.temperature)
            .with_model(self.model.clone());

        Ok(match self.generator.generate(&request).await {
            Ok(text) => StageOutcome::Generated(text),
            Err(err) => {
                warn!(
                    stage = definition.name.as_str(),
                    error = %err,
                    "Generation failed"
                );
                StageOutcome::Failed(err)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;

    #[tokio::test]
    async fn test_blank_description_fails_fast() {
        let generator = Arc::new(MockGenerator::new());
        let pipeline = RequirementsPipeline::new(generator.clone());

        let err = pipeline.run("   ", DEFAULT_TEMPERATURE).await.unwrap_err();

        assert!(matches!(err, PipelineError::Input(_)));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_description_fails_fast() {
        let generator = Arc::new(MockGenerator::new());
        let pipeline = RequirementsPipeline::new(generator.clone());

        let err = pipeline.run("", 0.0).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Please enter a project description."
        );
    }

    #[tokio::test]
    async fn test_model_override_reaches_requests() {
        let generator = Arc::new(MockGenerator::new());
        let pipeline =
            RequirementsPipeline::new(generator.clone()).with_model("command-r");

        pipeline
            .run("Build a mobile app", DEFAULT_TEMPERATURE)
            .await
            .unwrap();

        for request in generator.requests() {
            assert_eq!(request.model, "command-r");
            assert!((request.temperature - DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
        }
    }
}

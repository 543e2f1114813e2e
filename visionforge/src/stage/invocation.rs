//! The per-attempt invocation contract shared by all four stages.

use super::{render, StageDefinition, StageName};
use crate::errors::{GenerationError, TemplateError};
use std::collections::HashMap;

/// One fully prepared call to a stage.
///
/// Built fresh for every attempt, refinement re-invocations included,
/// and immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct StageInvocation {
    /// The stage being invoked.
    pub stage: StageName,
    /// The prompt exactly as it will reach the generator.
    pub rendered_prompt: String,
    /// Sampling temperature for this attempt.
    pub temperature: f32,
    /// Refinement instructions merged into the prompt, if any.
    pub refinement: Option<String>,
}

impl StageInvocation {
    /// Builds an invocation by rendering the stage template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the inputs do not cover the
    /// template's required placeholders.
    pub fn build(
        definition: &StageDefinition,
        inputs: &HashMap<String, String>,
        temperature: f32,
        refinement: Option<&str>,
    ) -> Result<Self, TemplateError> {
        let rendered_prompt = render(definition, inputs, refinement)?;
        Ok(Self {
            stage: definition.name,
            rendered_prompt,
            temperature,
            refinement: refinement.map(str::to_string),
        })
    }
}

/// What a single invocation produced.
///
/// Outcomes are transient: approval promotes the candidate text into
/// the run's state, any other decision discards it.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome {
    /// The generator returned candidate text for review.
    Generated(String),
    /// The generator failed; the failure notice is shown at the gate
    /// in place of a candidate.
    Failed(GenerationError),
}

impl StageOutcome {
    /// Returns the candidate text, if this outcome carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generated(text) => Some(text),
            Self::Failed(_) => None,
        }
    }

    /// Returns true when the invocation produced candidate text.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// The text a reviewer sees: the candidate, or the failure notice
    /// in its place.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Generated(text) => text.clone(),
            Self::Failed(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_renders_the_template() {
        let definition = StageDefinition::of(StageName::ProjectManager);
        let mut inputs = HashMap::new();
        inputs.insert(
            "project_description".to_string(),
            "An inventory tracker".to_string(),
        );

        let invocation = StageInvocation::build(&definition, &inputs, 0.4, None).unwrap();

        assert_eq!(invocation.stage, StageName::ProjectManager);
        assert!(invocation.rendered_prompt.contains("An inventory tracker"));
        assert_eq!(invocation.refinement, None);
    }

    #[test]
    fn test_build_records_the_refinement() {
        let definition = StageDefinition::of(StageName::ProjectManager);
        let mut inputs = HashMap::new();
        inputs.insert("project_description".to_string(), "A web shop".to_string());

        let invocation =
            StageInvocation::build(&definition, &inputs, 0.4, Some("keep it short")).unwrap();

        assert_eq!(invocation.refinement.as_deref(), Some("keep it short"));
        assert!(invocation
            .rendered_prompt
            .ends_with("Refinement Instructions: keep it short"));
    }

    #[test]
    fn test_build_fails_without_inputs() {
        let definition = StageDefinition::of(StageName::Documentation);
        let err = StageInvocation::build(&definition, &HashMap::new(), 0.4, None).unwrap_err();
        assert_eq!(err.placeholder, "refined_requirements");
    }

    #[test]
    fn test_outcome_accessors() {
        let generated = StageOutcome::Generated("candidate".to_string());
        assert!(generated.is_generated());
        assert_eq!(generated.text(), Some("candidate"));
        assert_eq!(generated.display_text(), "candidate");

        let failed = StageOutcome::Failed(GenerationError::rate_limited("0m12.00s"));
        assert!(!failed.is_generated());
        assert_eq!(failed.text(), None);
        assert_eq!(
            failed.display_text(),
            "API call Rate limit exceeded. Please try again in 0m12.00s."
        );
    }
}

//! Accumulated state for a single pipeline run.

use crate::stage::StageName;
use std::collections::HashMap;
use uuid::Uuid;

/// State owned by the controller for the duration of one run.
///
/// Approved outputs are append-only: an entry exists for a stage
/// exactly when the cursor has moved past it. The state is created
/// when a run starts and dropped when it ends; independent runs never
/// share it.
#[derive(Debug, Clone)]
pub struct PipelineState {
    run_id: Uuid,
    project_description: String,
    approved: HashMap<StageName, String>,
    cursor: usize,
}

impl PipelineState {
    /// Creates state for a fresh run.
    #[must_use]
    pub fn new(project_description: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            project_description: project_description.into(),
            approved: HashMap::new(),
            cursor: 0,
        }
    }

    /// The run's unique id.
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The original project description.
    #[must_use]
    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    /// Zero-based index of the stage the run is currently on.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The approved output of a completed stage.
    #[must_use]
    pub fn approved_output(&self, stage: StageName) -> Option<&str> {
        self.approved.get(&stage).map(String::as_str)
    }

    /// Number of stages approved so far.
    #[must_use]
    pub fn approved_count(&self) -> usize {
        self.approved.len()
    }

    /// Records a stage's approved output and advances the cursor past
    /// it.
    pub fn approve(&mut self, stage: StageName, text: impl Into<String>) {
        self.approved.insert(stage, text.into());
        self.cursor = stage.index() + 1;
    }

    /// Render inputs for a stage: the project description for the
    /// first, the immediately preceding stage's approved output for
    /// every later one.
    ///
    /// A stage whose upstream output is not yet approved gets an empty
    /// map, which rendering rejects as a [`crate::errors::TemplateError`].
    #[must_use]
    pub fn inputs_for(&self, stage: StageName) -> HashMap<String, String> {
        let mut inputs = HashMap::new();
        match stage {
            StageName::ProjectManager => {
                inputs.insert(
                    "project_description".to_string(),
                    self.project_description.clone(),
                );
            }
            StageName::StakeholderInterview => {
                if let Some(text) = self.approved_output(StageName::ProjectManager) {
                    inputs.insert("instructions".to_string(), text.to_string());
                }
            }
            StageName::RequirementsAnalyzer => {
                if let Some(text) = self.approved_output(StageName::StakeholderInterview) {
                    inputs.insert("initial_requirements".to_string(), text.to_string());
                }
            }
            StageName::Documentation => {
                if let Some(text) = self.approved_output(StageName::RequirementsAnalyzer) {
                    inputs.insert("refined_requirements".to_string(), text.to_string());
                }
            }
        }
        inputs
    }
}

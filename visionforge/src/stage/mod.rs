//! Stage identity, definitions, and the per-attempt invocation
//! contract.
//!
//! The four stages are fixed: their order, templates, and required
//! inputs are process-wide constants. Everything that varies between
//! attempts lives in [`StageInvocation`].

mod invocation;
mod render;
pub mod templates;

pub use invocation::{StageInvocation, StageOutcome};
pub use render::render;

use serde::{Deserialize, Serialize};

/// The four stages of the requirements pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    /// Turns the project description into requirements-gathering
    /// instructions.
    ProjectManager,
    /// Simulates stakeholder interviews to surface initial
    /// requirements.
    StakeholderInterview,
    /// Refines and categorizes the initial requirements.
    RequirementsAnalyzer,
    /// Compiles the final requirements document.
    Documentation,
}

impl StageName {
    /// All stages in pipeline order.
    pub const ALL: [Self; 4] = [
        Self::ProjectManager,
        Self::StakeholderInterview,
        Self::RequirementsAnalyzer,
        Self::Documentation,
    ];

    /// Snake-case identifier for logs and serialized reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectManager => "project_manager",
            Self::StakeholderInterview => "stakeholder_interview",
            Self::RequirementsAnalyzer => "requirements_analyzer",
            Self::Documentation => "documentation",
        }
    }

    /// Human-readable stage name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ProjectManager => "Project Manager",
            Self::StakeholderInterview => "Stakeholder Interview",
            Self::RequirementsAnalyzer => "Requirements Analyzer",
            Self::Documentation => "Documentation",
        }
    }

    /// The agent label used in progress messages.
    #[must_use]
    pub const fn agent_label(self) -> &'static str {
        match self {
            Self::ProjectManager => "Project Manager Agent",
            Self::StakeholderInterview => "Stakeholder Interview Agent",
            Self::RequirementsAnalyzer => "Requirements Analyzer Agent",
            Self::Documentation => "Documentation Agent",
        }
    }

    /// Zero-based position in the pipeline.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ProjectManager => 0,
            Self::StakeholderInterview => 1,
            Self::RequirementsAnalyzer => 2,
            Self::Documentation => 3,
        }
    }
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Immutable definition of one pipeline stage.
///
/// The four definitions are process-wide constants; [`Self::of`] hands
/// out the one matching a stage name.
#[derive(Debug, Clone, Copy)]
pub struct StageDefinition {
    /// Which stage this defines.
    pub name: StageName,
    /// Prompt template with `{placeholder}` markers.
    pub template: &'static str,
    /// Placeholders that must be present in the render inputs.
    pub required_inputs: &'static [&'static str],
    /// Message sent to the progress sink when the stage begins.
    pub progress_message: &'static str,
}

impl StageDefinition {
    /// Returns the definition for the given stage.
    #[must_use]
    pub const fn of(name: StageName) -> Self {
        match name {
            StageName::ProjectManager => Self {
                name,
                template: templates::PROJECT_MANAGER,
                required_inputs: &["project_description"],
                progress_message: "Project Manager Agent: Analyzing project description...",
            },
            StageName::StakeholderInterview => Self {
                name,
                template: templates::STAKEHOLDER_INTERVIEW,
                required_inputs: &["instructions"],
                progress_message: "Stakeholder Interview Agent: Conducting simulated interviews...",
            },
            StageName::RequirementsAnalyzer => Self {
                name,
                template: templates::REQUIREMENTS_ANALYZER,
                required_inputs: &["initial_requirements"],
                progress_message:
                    "Requirements Analyzer Agent: Refining and categorizing requirements...",
            },
            StageName::Documentation => Self {
                name,
                template: templates::DOCUMENTATION,
                required_inputs: &["refined_requirements"],
                progress_message: "Documentation Agent: Compiling final requirements document...",
            },
        }
    }
}

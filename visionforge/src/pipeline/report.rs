//! Run reports and the final document.

use crate::stage::StageName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timing and attempt counts for one completed stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    /// The stage.
    pub stage: StageName,
    /// Generation calls made: the first attempt plus every refinement
    /// or retry.
    pub attempts: u32,
    /// Wall-clock time spent on the stage, review included.
    pub duration_ms: f64,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique id for the run.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: f64,
    /// Per-stage breakdown in pipeline order.
    pub stages: Vec<StageReport>,
}

impl RunReport {
    /// The report entry for one stage, if it completed.
    #[must_use]
    pub fn stage(&self, stage: StageName) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == stage)
    }

    /// Total generation calls across all stages.
    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.stages.iter().map(|report| report.attempts).sum()
    }
}

/// The product of a successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalDocument {
    /// The approved requirements document text.
    pub text: String,
    /// How the run went.
    pub report: RunReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        let now = Utc::now();
        RunReport {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            duration_ms: 12.5,
            stages: vec![
                StageReport {
                    stage: StageName::ProjectManager,
                    attempts: 3,
                    duration_ms: 7.0,
                },
                StageReport {
                    stage: StageName::StakeholderInterview,
                    attempts: 1,
                    duration_ms: 5.5,
                },
            ],
        }
    }

    #[test]
    fn test_stage_lookup_and_attempt_totals() {
        let report = sample_report();

        assert_eq!(report.total_attempts(), 4);
        assert_eq!(
            report.stage(StageName::ProjectManager).map(|s| s.attempts),
            Some(3)
        );
        assert!(report.stage(StageName::Documentation).is_none());
    }

    #[test]
    fn test_report_serializes_stage_names_snake_case() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"project_manager\""));
        assert!(json.contains("\"stakeholder_interview\""));
    }
}

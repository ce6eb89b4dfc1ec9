use super::{AxisChecks, EligibilityAxis};
use crate::occupations::domain::OccupationRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    High,
    Medium,
}

impl RecommendationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// Remediation note for one failing axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: EligibilityAxis,
    pub message: String,
    pub priority: RecommendationPriority,
}

/// Ordered action for the client. Priority 1 is the most pressing; several steps
/// may share a priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextStep {
    pub step: String,
    pub description: String,
    pub priority: u8,
    pub timeframe: String,
}

pub(super) fn recommendation_for(
    axis: EligibilityAxis,
    occupation: &OccupationRecord,
) -> Recommendation {
    match axis {
        EligibilityAxis::Qualification => Recommendation {
            kind: axis,
            message: format!(
                "Required qualification: {}",
                occupation.qualifications.essential.join(" or ")
            ),
            priority: RecommendationPriority::High,
        },
        EligibilityAxis::Experience => Recommendation {
            kind: axis,
            message: format!(
                "Minimum work experience required: {}",
                occupation.work_experience.minimum
            ),
            priority: RecommendationPriority::High,
        },
        EligibilityAxis::English => Recommendation {
            kind: axis,
            message: format!(
                "English requirement: IELTS {}",
                occupation.english_requirements.ielts
            ),
            priority: RecommendationPriority::Medium,
        },
    }
}

pub(super) fn next_steps(checks: &AxisChecks, occupation: &OccupationRecord) -> Vec<NextStep> {
    let mut steps: Vec<NextStep> = checks.failing().map(remediation_step).collect();

    if checks.all_passed() {
        steps.push(NextStep {
            step: "Skills Assessment Application".to_string(),
            description: format!(
                "Lodge the skills assessment application with {}",
                occupation.skills_assessment.assessing_authority
            ),
            priority: 1,
            timeframe: occupation.skills_assessment.processing_time.clone(),
        });
    }

    steps
}

fn remediation_step(axis: EligibilityAxis) -> NextStep {
    let (step, description, priority, timeframe) = match axis {
        EligibilityAxis::Qualification => (
            "Obtain Required Qualification",
            "Complete a qualification recognised for this occupation or have an overseas qualification formally compared",
            1,
            "6-24 months",
        ),
        EligibilityAxis::Experience => (
            "Gain Work Experience",
            "Build paid, full-time experience in the nominated occupation until the minimum is met",
            2,
            "1-3 years",
        ),
        EligibilityAxis::English => (
            "Improve English Proficiency",
            "Prepare for and sit an accepted English test until the required band scores are reached",
            3,
            "3-6 months",
        ),
    };

    NextStep {
        step: step.to_string(),
        description: description.to_string(),
        priority,
        timeframe: timeframe.to_string(),
    }
}

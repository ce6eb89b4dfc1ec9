mod recommendations;
mod rules;

pub use recommendations::{NextStep, Recommendation, RecommendationPriority};

use super::catalog::OccupationCatalog;
use super::domain::{ClientProfile, OccupationRecord};
use serde::Serialize;
use tracing::debug;

pub const INVALID_OCCUPATION_REASON: &str = "Invalid occupation code";

/// One of the three independently evaluated requirement dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityAxis {
    Qualification,
    Experience,
    English,
}

impl EligibilityAxis {
    pub const fn ordered() -> [Self; 3] {
        [Self::Qualification, Self::Experience, Self::English]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Qualification => "Qualification",
            Self::Experience => "Experience",
            Self::English => "English",
        }
    }
}

/// Per-axis verdicts. An axis that was never evaluated stays `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AxisChecks {
    pub qualification: bool,
    pub experience: bool,
    pub english: bool,
}

impl AxisChecks {
    pub fn passed(&self, axis: EligibilityAxis) -> bool {
        match axis {
            EligibilityAxis::Qualification => self.qualification,
            EligibilityAxis::Experience => self.experience,
            EligibilityAxis::English => self.english,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.qualification && self.experience && self.english
    }

    pub fn failing(&self) -> impl Iterator<Item = EligibilityAxis> + '_ {
        EligibilityAxis::ordered()
            .into_iter()
            .filter(|axis| !self.passed(*axis))
    }

    fn set(&mut self, axis: EligibilityAxis, value: bool) {
        match axis {
            EligibilityAxis::Qualification => self.qualification = value,
            EligibilityAxis::Experience => self.experience = value,
            EligibilityAxis::English => self.english = value,
        }
    }
}

/// Verdict for a client against one occupation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    pub checks: AxisChecks,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<NextStep>,
    /// Axes skipped because the matching client field was absent. They still
    /// count as failing in `checks` and `eligible`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unevaluated: Vec<EligibilityAxis>,
}

/// Shape returned for codes that do not resolve; carries a `reason` and no `checks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidOccupation {
    pub eligible: bool,
    pub reason: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EligibilityOutcome {
    Evaluated(EligibilityResult),
    InvalidOccupation(InvalidOccupation),
}

impl EligibilityOutcome {
    pub fn is_eligible(&self) -> bool {
        match self {
            EligibilityOutcome::Evaluated(result) => result.eligible,
            EligibilityOutcome::InvalidOccupation(_) => false,
        }
    }

    pub fn result(&self) -> Option<&EligibilityResult> {
        match self {
            EligibilityOutcome::Evaluated(result) => Some(result),
            EligibilityOutcome::InvalidOccupation(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            EligibilityOutcome::Evaluated(_) => None,
            EligibilityOutcome::InvalidOccupation(invalid) => Some(&invalid.reason),
        }
    }
}

/// Evaluates a client against the occupation registered under `occupation_code`.
pub fn check_skills_assessment_eligibility(
    catalog: &OccupationCatalog,
    profile: &ClientProfile,
    occupation_code: &str,
) -> EligibilityOutcome {
    match catalog.get_occupation_by_code(occupation_code) {
        Some(occupation) => EligibilityOutcome::Evaluated(evaluate_occupation(profile, occupation)),
        None => {
            debug!(code = occupation_code, "eligibility requested for unknown occupation");
            EligibilityOutcome::InvalidOccupation(InvalidOccupation {
                eligible: false,
                reason: INVALID_OCCUPATION_REASON.to_string(),
                recommendations: Vec::new(),
            })
        }
    }
}

/// Evaluates a client against an occupation already resolved from the catalog.
pub fn evaluate_occupation(
    profile: &ClientProfile,
    occupation: &OccupationRecord,
) -> EligibilityResult {
    let mut checks = AxisChecks::default();
    let mut recommendations = Vec::new();
    let mut unevaluated = Vec::new();

    for axis in EligibilityAxis::ordered() {
        match rules::evaluate_axis(axis, profile, occupation) {
            Some(passed) => {
                checks.set(axis, passed);
                if !passed {
                    recommendations.push(recommendations::recommendation_for(axis, occupation));
                }
            }
            None => unevaluated.push(axis),
        }
    }

    let next_steps = recommendations::next_steps(&checks, occupation);
    let eligible = checks.all_passed();

    debug!(
        code = %occupation.code,
        eligible,
        failing = recommendations.len(),
        skipped = unevaluated.len(),
        "evaluated skills assessment eligibility"
    );

    EligibilityResult {
        eligible,
        checks,
        recommendations,
        next_steps,
        unevaluated,
    }
}

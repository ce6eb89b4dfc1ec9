use super::common::*;
use crate::occupations::domain::ClientProfile;
use crate::occupations::eligibility::{
    check_skills_assessment_eligibility, EligibilityAxis, EligibilityOutcome,
    RecommendationPriority, INVALID_OCCUPATION_REASON,
};

fn evaluated(profile: &ClientProfile, code: &str) -> crate::occupations::EligibilityResult {
    match check_skills_assessment_eligibility(&catalog(), profile, code) {
        EligibilityOutcome::Evaluated(result) => result,
        other => panic!("expected an evaluated result for {code}, got {other:?}"),
    }
}

#[test]
fn apprentice_plumber_fails_experience_and_english_only() {
    let result = evaluated(&apprentice_plumber(), PLUMBER);

    assert!(!result.eligible);
    assert!(result.checks.qualification);
    assert!(!result.checks.experience);
    assert!(!result.checks.english);

    let kinds: Vec<_> = result.recommendations.iter().map(|rec| rec.kind).collect();
    assert_eq!(kinds, vec![EligibilityAxis::Experience, EligibilityAxis::English]);
    assert_eq!(result.recommendations[0].priority, RecommendationPriority::High);
    assert_eq!(result.recommendations[1].priority, RecommendationPriority::Medium);
    assert!(result.recommendations[0]
        .message
        .contains("3 years full-time post-qualification experience"));
    assert!(result.recommendations[1].message.contains("6.0 overall"));
}

#[test]
fn toggling_experience_only_flips_the_experience_axis() {
    let below = evaluated(&ClientProfile::new("Diploma/Certificate", 2.0, "Advanced"), PLUMBER);
    let at_minimum =
        evaluated(&ClientProfile::new("Diploma/Certificate", 3.0, "Advanced"), PLUMBER);

    assert!(!below.checks.experience);
    assert!(at_minimum.checks.experience);
    assert_eq!(below.checks.qualification, at_minimum.checks.qualification);
    assert_eq!(below.checks.english, at_minimum.checks.english);
    assert!(!below.eligible);
    assert!(at_minimum.eligible);
}

#[test]
fn one_satisfied_qualification_is_enough() {
    // Bachelor satisfies the first descriptor but not the postgraduate one.
    let result = evaluated(&ClientProfile::new("Bachelor's Degree", 2.0, "Native"), EARLY_CHILDHOOD_TEACHER);
    assert!(result.checks.qualification);

    let diploma = evaluated(&ClientProfile::new("Diploma/Certificate", 2.0, "Native"), EARLY_CHILDHOOD_TEACHER);
    assert!(!diploma.checks.qualification);
    assert_eq!(diploma.recommendations[0].kind, EligibilityAxis::Qualification);
    assert!(diploma.recommendations[0]
        .message
        .contains("Bachelor of Education (Early Childhood) or Postgraduate Diploma"));
}

#[test]
fn seven_point_five_requires_native_english() {
    let advanced = evaluated(&ClientProfile::new("Master's Degree", 5.0, "Advanced"), EARLY_CHILDHOOD_TEACHER);
    let native = evaluated(&ClientProfile::new("Master's Degree", 5.0, "Native"), EARLY_CHILDHOOD_TEACHER);

    assert!(!advanced.checks.english);
    assert!(native.checks.english);

    let nurse = evaluated(&ClientProfile::new("Bachelor's Degree", 2.0, "Advanced"), REGISTERED_NURSE);
    assert!(nurse.checks.english);
}

#[test]
fn unknown_code_returns_reason_without_checks() {
    let outcome = check_skills_assessment_eligibility(&catalog(), &apprentice_plumber(), UNKNOWN_CODE);

    assert!(!outcome.is_eligible());
    assert_eq!(outcome.reason(), Some(INVALID_OCCUPATION_REASON));
    assert!(outcome.result().is_none());

    let json = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(json["eligible"], false);
    assert_eq!(json["reason"], "Invalid occupation code");
    assert_eq!(json["recommendations"], serde_json::json!([]));
    assert!(json.get("checks").is_none());
}

#[test]
fn missing_fields_skip_axes_without_recommendations() {
    let profile = profile_without_english("Diploma/Certificate", 4.0);
    let result = evaluated(&profile, PLUMBER);

    assert!(result.checks.qualification);
    assert!(result.checks.experience);
    assert!(!result.checks.english);
    assert!(!result.eligible);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.unevaluated, vec![EligibilityAxis::English]);

    // The skipped axis still produces its remediation step.
    assert_eq!(result.next_steps.len(), 1);
    assert_eq!(result.next_steps[0].step, "Improve English Proficiency");
}

#[test]
fn zero_years_counts_as_not_supplied() {
    let result = evaluated(&ClientProfile::new("Diploma/Certificate", 0.0, "Advanced"), PLUMBER);

    assert!(!result.checks.experience);
    assert_eq!(result.unevaluated, vec![EligibilityAxis::Experience]);
    assert!(result
        .recommendations
        .iter()
        .all(|rec| rec.kind != EligibilityAxis::Experience));
}

#[test]
fn empty_profile_is_ineligible_with_every_step() {
    let result = evaluated(&ClientProfile::default(), SOFTWARE_ENGINEER);

    assert!(!result.eligible);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.unevaluated.len(), 3);
    let steps: Vec<_> = result.next_steps.iter().map(|step| step.priority).collect();
    assert_eq!(steps, vec![1, 2, 3]);
}

#[test]
fn failing_steps_follow_fixed_order_and_timeframes() {
    let result = evaluated(&ClientProfile::new("High School", 1.0, "Intermediate"), SOFTWARE_ENGINEER);

    let steps: Vec<_> = result
        .next_steps
        .iter()
        .map(|step| (step.priority, step.timeframe.as_str()))
        .collect();
    assert_eq!(steps, vec![(1, "6-24 months"), (2, "1-3 years"), (3, "3-6 months")]);
    assert!(result
        .next_steps
        .iter()
        .all(|step| step.step != "Skills Assessment Application"));
}

#[test]
fn passing_every_axis_schedules_the_application() {
    let result = evaluated(&qualified_tradesperson(), PLUMBER);

    assert!(result.eligible);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.next_steps.len(), 1);
    let application = &result.next_steps[0];
    assert_eq!(application.step, "Skills Assessment Application");
    assert_eq!(application.priority, 1);
    assert_eq!(application.timeframe, "8-12 weeks");
    assert!(application.description.contains("TRA"));
}

#[test]
fn serialized_result_uses_legacy_field_names() {
    let result = evaluated(&apprentice_plumber(), PLUMBER);
    let json = serde_json::to_value(&result).expect("serialize result");

    assert_eq!(json["checks"]["qualification"], true);
    assert_eq!(json["recommendations"][0]["type"], "experience");
    assert_eq!(json["recommendations"][0]["priority"], "high");
    assert!(json["nextSteps"].is_array());
    assert!(json.get("unevaluated").is_none());
}

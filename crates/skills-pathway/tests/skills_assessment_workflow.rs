use std::sync::Arc;

use chrono::NaiveDate;
use skills_pathway::occupations::{
    calculate_assessment_timeline, check_skills_assessment_eligibility, match_client_to_anzsco,
    ClientProfile, ClientReadiness, EligibilityAxis, MatchProfile, OccupationCatalog,
    PathwayAdvisor,
};

fn consultation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid consultation date")
}

#[test]
fn apprentice_plumber_is_guided_towards_the_missing_requirements() {
    let catalog = OccupationCatalog::standard();
    let client = ClientProfile::new("Certificate III", 1.0, "Basic");

    let outcome = check_skills_assessment_eligibility(&catalog, &client, "334111");
    let result = outcome.result().expect("plumber is catalogued");

    assert!(!result.eligible);
    let failing: Vec<_> = result.recommendations.iter().map(|rec| rec.kind).collect();
    assert_eq!(failing, vec![EligibilityAxis::Experience, EligibilityAxis::English]);

    let steps: Vec<_> = result
        .next_steps
        .iter()
        .map(|step| step.step.as_str())
        .collect();
    assert_eq!(steps, vec!["Gain Work Experience", "Improve English Proficiency"]);
}

#[test]
fn engineer_enquiry_flows_from_match_to_plan() {
    let catalog = Arc::new(OccupationCatalog::standard());
    let profile = MatchProfile {
        education_level: Some("Master's Degree".to_string()),
        experience_years: Some(3.0),
    };

    let candidates = match_client_to_anzsco(&catalog, "software engineer", Some(&profile));
    let best = candidates.first().expect("at least one candidate");
    assert_eq!(best.occupation.code, "261313");
    assert_eq!(best.match_score, 100.0);
    assert_eq!(best.eligible, Some(true));

    let advisor = PathwayAdvisor::new(Arc::clone(&catalog), 10);
    let client = ClientProfile::new("Master's Degree", 3.0, "Advanced");
    let readiness = ClientReadiness {
        has_documents: true,
        has_english_test: true,
    };
    let plan = advisor
        .plan(&client, &best.occupation.code, readiness, consultation_date())
        .expect("plan for catalogued occupation");

    assert!(plan.eligibility.eligible);
    assert_eq!(plan.eligibility.next_steps.len(), 1);
    assert_eq!(plan.eligibility.next_steps[0].timeframe, "8-12 weeks");
    assert_eq!(plan.checklist.len(), 6);
    assert_eq!(plan.timeline.costs.assessment, "AUD $1,340");
    assert_eq!(
        plan.projected_outcome.earliest,
        consultation_date() + chrono::Duration::weeks(14)
    );
}

#[test]
fn timeline_estimates_do_not_depend_on_eligibility() {
    let catalog = OccupationCatalog::standard();

    let with_nothing =
        calculate_assessment_timeline(&catalog, "221111", ClientReadiness::default())
            .expect("accountant is catalogued");
    assert_eq!(with_nothing.timeline.assessment, "8-10 weeks");
    assert_eq!(with_nothing.costs.assessment, "AUD $550");
    assert_eq!(with_nothing.timeline.total.to_string(), "16-24 weeks");
}

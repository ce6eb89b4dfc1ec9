use crate::infra::{load_advisor, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use skills_pathway::config::AppConfig;
use skills_pathway::error::AppError;
use skills_pathway::occupations::{
    ActionPlan, ClientProfile, ClientReadiness, EligibilityOutcome, LanguageSkills, MatchCandidate,
    MatchProfile, OccupationRecord, PathwayAdvisor,
};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Case-insensitive title fragment; omit to list every occupation
    pub(crate) term: Option<String>,
    /// Restrict results to one category label (e.g. Trades, ICT)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    /// Highest completed education level (e.g. "Bachelor's Degree")
    #[arg(long)]
    pub(crate) education: Option<String>,
    /// Years of relevant work experience
    #[arg(long)]
    pub(crate) experience: Option<f64>,
    /// English proficiency (None, Basic, Intermediate, Advanced, Native)
    #[arg(long)]
    pub(crate) english: Option<String>,
}

impl ProfileArgs {
    fn into_profile(self) -> ClientProfile {
        ClientProfile {
            education_level: self.education,
            work_experience_years: self.experience,
            language_skills: self.english.map(|english| LanguageSkills {
                english: Some(english),
            }),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// ANZSCO occupation code
    pub(crate) code: String,
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Print JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct MatchArgs {
    /// Job title as the client describes it
    pub(crate) occupation: String,
    /// Highest completed education level
    #[arg(long)]
    pub(crate) education: Option<String>,
    /// Years of relevant work experience
    #[arg(long)]
    pub(crate) experience: Option<f64>,
    /// Print JSON instead of a ranked list
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PlanArgs {
    /// ANZSCO occupation code
    pub(crate) code: String,
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Client already holds certified documents
    #[arg(long)]
    pub(crate) has_documents: bool,
    /// Client already holds a valid English test result
    #[arg(long)]
    pub(crate) has_english_test: bool,
    /// Plan start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Print JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

fn advisor(catalog: Option<PathBuf>) -> Result<PathwayAdvisor, AppError> {
    let config = AppConfig::load()?;
    load_advisor(&config.catalog, catalog)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_search(args: SearchArgs, catalog: Option<PathBuf>) -> Result<(), AppError> {
    let advisor = advisor(catalog)?;
    let results = advisor.search(args.term.as_deref(), args.category.as_deref());

    if args.json {
        return print_json(&results);
    }
    print!("{}", render_search(&results));
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs, catalog: Option<PathBuf>) -> Result<(), AppError> {
    let advisor = advisor(catalog)?;
    let outcome = advisor.evaluate(&args.profile.into_profile(), &args.code);

    if args.json {
        return print_json(&outcome);
    }
    print!("{}", render_evaluation(&args.code, &outcome));
    Ok(())
}

pub(crate) fn run_match(args: MatchArgs, catalog: Option<PathBuf>) -> Result<(), AppError> {
    let advisor = advisor(catalog)?;
    let profile = (args.education.is_some() || args.experience.is_some()).then(|| MatchProfile {
        education_level: args.education,
        experience_years: args.experience,
    });
    let candidates = advisor.match_client(&args.occupation, profile.as_ref());

    if args.json {
        return print_json(&candidates);
    }
    print!("{}", render_matches(&args.occupation, &candidates));
    Ok(())
}

pub(crate) fn run_plan(args: PlanArgs, catalog: Option<PathBuf>) -> Result<(), AppError> {
    let advisor = advisor(catalog)?;
    let readiness = ClientReadiness {
        has_documents: args.has_documents,
        has_english_test: args.has_english_test,
    };
    let start = args.start.unwrap_or_else(|| Local::now().date_naive());
    let profile = args.profile.into_profile();

    match advisor.plan(&profile, &args.code, readiness, start) {
        Some(plan) if args.json => print_json(&plan),
        Some(plan) => {
            print!("{}", render_plan(&plan));
            Ok(())
        }
        None => {
            println!("No occupation is registered under code {}", args.code);
            Ok(())
        }
    }
}

pub(crate) fn render_search(results: &[&OccupationRecord]) -> String {
    let mut out = String::new();
    if results.is_empty() {
        out.push_str("No occupations matched\n");
        return out;
    }

    let _ = writeln!(out, "{} occupation(s)", results.len());
    for record in results {
        let _ = writeln!(
            out,
            "- {} {} [{}] assessed by {}",
            record.code, record.title, record.category, record.skills_assessment.assessing_authority
        );
    }
    out
}

pub(crate) fn render_evaluation(code: &str, outcome: &EligibilityOutcome) -> String {
    let mut out = String::new();
    let result = match outcome {
        EligibilityOutcome::Evaluated(result) => result,
        EligibilityOutcome::InvalidOccupation(invalid) => {
            let _ = writeln!(out, "{code}: {}", invalid.reason);
            return out;
        }
    };

    let verdict = if result.eligible { "eligible" } else { "not eligible" };
    let _ = writeln!(out, "{code}: {verdict}");
    let _ = writeln!(
        out,
        "Checks: qualification {} | experience {} | english {}",
        pass_label(result.checks.qualification),
        pass_label(result.checks.experience),
        pass_label(result.checks.english)
    );
    if !result.unevaluated.is_empty() {
        let skipped: Vec<_> = result.unevaluated.iter().map(|axis| axis.label()).collect();
        let _ = writeln!(out, "Not supplied: {}", skipped.join(", "));
    }

    if !result.recommendations.is_empty() {
        out.push_str("Recommendations:\n");
        for recommendation in &result.recommendations {
            let _ = writeln!(
                out,
                "  - [{}] {}",
                recommendation.priority.label(),
                recommendation.message
            );
        }
    }

    out.push_str("Next steps:\n");
    for step in &result.next_steps {
        let _ = writeln!(
            out,
            "  {}. {} ({}): {}",
            step.priority, step.step, step.timeframe, step.description
        );
    }
    out
}

pub(crate) fn render_matches(query: &str, candidates: &[MatchCandidate<'_>]) -> String {
    let mut out = String::new();
    if candidates.is_empty() {
        let _ = writeln!(out, "No occupations matched '{query}'");
        return out;
    }

    let _ = writeln!(out, "Matches for '{query}'");
    for (rank, candidate) in candidates.iter().enumerate() {
        let eligibility = match candidate.eligible {
            Some(true) => " | eligible",
            Some(false) => " | not eligible",
            None => "",
        };
        let _ = writeln!(
            out,
            "{}. {} {} | {:.0}% match{}",
            rank + 1,
            candidate.occupation.code,
            candidate.occupation.title,
            candidate.match_score,
            eligibility
        );
    }
    out
}

pub(crate) fn render_plan(plan: &ActionPlan<'_>) -> String {
    let mut out = String::new();
    let occupation = plan.occupation;
    let _ = writeln!(
        out,
        "Skills assessment plan for {} {} (prepared {})",
        occupation.code, occupation.title, plan.prepared_on
    );
    let _ = writeln!(
        out,
        "Eligibility: {}",
        if plan.eligibility.eligible {
            "eligible"
        } else {
            "not yet eligible"
        }
    );
    for step in &plan.eligibility.next_steps {
        let _ = writeln!(out, "  {}. {} ({})", step.priority, step.step, step.timeframe);
    }

    let required = plan.checklist.iter().filter(|doc| doc.required).count();
    let _ = writeln!(
        out,
        "Documents: {} listed, {} required",
        plan.checklist.len(),
        required
    );
    for document in &plan.checklist {
        let marker = if document.required { "*" } else { " " };
        let _ = writeln!(out, "  {marker} {}", document.name);
    }

    let timeline = &plan.timeline;
    let _ = writeln!(
        out,
        "Timeline: preparation {} | assessment {} | total {}",
        timeline.timeline.preparation, timeline.timeline.assessment, timeline.timeline.total
    );
    let _ = writeln!(
        out,
        "Costs: assessment {} | english test {} | translation {} | total {}",
        timeline.costs.assessment,
        timeline.costs.english_test,
        timeline.costs.document_translation,
        timeline.costs.total
    );
    let _ = writeln!(
        out,
        "Expected outcome between {} and {}",
        plan.projected_outcome.earliest, plan.projected_outcome.latest
    );
    out
}

fn pass_label(passed: bool) -> &'static str {
    if passed {
        "pass"
    } else {
        "fail"
    }
}

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use skills_pathway::config::CatalogConfig;
use skills_pathway::error::AppError;
use skills_pathway::occupations::{OccupationCatalog, PathwayAdvisor};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the advisor from the configured catalog, preferring an explicit override path.
pub(crate) fn load_advisor(
    config: &CatalogConfig,
    override_path: Option<PathBuf>,
) -> Result<PathwayAdvisor, AppError> {
    let catalog = match override_path.or_else(|| config.path.clone()) {
        Some(path) => {
            let catalog = OccupationCatalog::from_path(&path)?;
            info!(path = %path.display(), occupations = catalog.len(), "loaded occupation catalog");
            catalog
        }
        None => OccupationCatalog::standard(),
    };

    Ok(PathwayAdvisor::new(Arc::new(catalog), config.search_limit))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_with_whitespace() {
        assert_eq!(
            parse_date(" 2026-01-05 ").expect("parses"),
            NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date")
        );
        assert!(parse_date("2026-13-01").is_err());
    }

    #[test]
    fn load_advisor_defaults_to_standard_catalog() {
        let config = CatalogConfig {
            path: None,
            search_limit: 7,
        };
        let advisor = load_advisor(&config, None).expect("standard catalog loads");

        assert_eq!(advisor.search_limit(), 7);
        assert_eq!(advisor.catalog().len(), OccupationCatalog::standard().len());
    }

    #[test]
    fn load_advisor_surfaces_unreadable_overrides() {
        let config = CatalogConfig::default();
        let result = load_advisor(&config, Some(PathBuf::from("does-not-exist.json")));

        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}

use chrono::NaiveDate;
use guesthouse_safety::assessment::AssessmentEngine;
use guesthouse_safety::config::AppConfig;
use guesthouse_safety::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Engine for one-shot CLI commands. An explicit table wins over the configured one.
pub(crate) fn build_engine(cost_table: Option<PathBuf>) -> Result<AssessmentEngine, AppError> {
    let mut settings = AppConfig::load()?.assessment;
    if let Some(path) = cost_table {
        settings.cost_table = Some(path);
    }
    Ok(AssessmentEngine::new(settings.cost_config()?))
}

use metrics_exporter_prometheus::PrometheusHandle;
use skill_gap::dashboard::SkillDemandDataset;
use skill_gap::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Falls back to the built-in sample when no CSV path is given.
pub(crate) fn load_dataset(path: Option<PathBuf>) -> Result<SkillDemandDataset, AppError> {
    match path {
        Some(path) => {
            let dataset = SkillDemandDataset::from_path(&path)?;
            info!(path = %path.display(), rows = dataset.len(), "loaded demand dataset");
            Ok(dataset)
        }
        None => Ok(SkillDemandDataset::sample()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_uses_sample() {
        let dataset = load_dataset(None).expect("sample loads");
        assert_eq!(dataset, SkillDemandDataset::sample());
    }

    #[test]
    fn unreadable_path_is_a_dataset_error() {
        let err = load_dataset(Some(PathBuf::from("does/not/exist.csv")))
            .expect_err("missing file rejected");
        assert!(matches!(err, AppError::Dataset(_)));
    }
}

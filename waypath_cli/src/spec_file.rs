use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;
use waypath_interpolator::MultilinePositionInterpolator;

const SPEC_FILE_ENV_VAR: &str = "WAYPATH_SPEC";

/// `--spec` wins over the `WAYPATH_SPEC` environment variable.
pub fn resolve_spec_path(spec: Option<PathBuf>) -> Result<PathBuf, anyhow::Error> {
    match spec {
        Some(path) => Ok(path),
        None => std::env::var(SPEC_FILE_ENV_VAR)
            .map(PathBuf::from)
            .with_context(|| format!("no --spec given and {SPEC_FILE_ENV_VAR} is not set")),
    }
}

pub fn load_interpolator(path: &Path) -> Result<MultilinePositionInterpolator, anyhow::Error> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let interpolator = MultilinePositionInterpolator::new(text)?;

    info!(
        "Loaded {} ({} vertices, {:.3} {})",
        path.display(),
        interpolator.spec().coordinates().0.len(),
        interpolator.path().total_length(),
        interpolator.path().unit()
    );

    Ok(interpolator)
}

use std::path::Path;

use filmstrip_common::{FilmstripError, Result};
use filmstrip_config::toml_loader::{create_default_config, default_config_path};
use tracing::info;

/// Write the default template to `path` (or the platform default).
pub fn init_config(path: Option<&Path>, force: bool) -> Result<String> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };

    if path.exists() && !force {
        return Err(FilmstripError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    create_default_config(&path)?;
    info!("wrote default config to {}", path.display());
    super::to_json(&serde_json::json!({ "written": path }))
}

use std::path::Path;

use crate::error::SpecError;
use crate::model::Config;

/// Read and deserialize a config file (YAML; JSON works too since JSON is
/// valid YAML). The result is not yet validated — call
/// [`Config::validate`](crate::model::Config) before building IR from it.
pub fn load_config(path: &Path) -> Result<Config, SpecError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

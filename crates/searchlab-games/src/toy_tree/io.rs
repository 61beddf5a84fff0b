use std::{fs, path::Path};

use crate::toy_tree::{GameTreeSpec, ToyState, TreeSpecError};

/// Load a game tree spec from YAML without validating it.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<GameTreeSpec, TreeSpecError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Load, validate, and compile a game tree from YAML.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<ToyState, TreeSpecError> {
    load_yaml(path)?.compile()
}

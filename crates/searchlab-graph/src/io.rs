use std::{fs, path::Path};

use crate::{GRAPH_SCHEMA_VERSION, Graph, GraphError, GraphSpec};

/// Load a graph spec from YAML on disk.
///
/// Read failures carry the offending path. The spec is not validated here.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<GraphSpec, GraphError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let spec: GraphSpec = serde_yaml::from_str(&yaml)?;
    tracing::debug!(
        path = %path.display(),
        nodes = spec.nodes.len(),
        edges = spec.edges.len(),
        goals = spec.heuristic.len(),
        "loaded route graph spec"
    );
    Ok(spec)
}

/// Load and compile a graph from a YAML file.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<Graph, GraphError> {
    let spec = load_yaml(path)?;
    spec.compile()
}

/// Write a graph spec as YAML, stamping the current schema version if it has none.
pub fn save_yaml(path: impl AsRef<Path>, spec: &GraphSpec) -> Result<(), GraphError> {
    let path = path.as_ref();
    let yaml = if spec.version.is_some() {
        serde_yaml::to_string(spec)?
    } else {
        serde_yaml::to_string(&GraphSpec {
            version: Some(GRAPH_SCHEMA_VERSION),
            ..spec.clone()
        })?
    };
    fs::write(path, yaml).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })
}

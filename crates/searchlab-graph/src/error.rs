use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for graph loading, validation, compilation, and lookups.
pub enum GraphError {
    #[error("failed to access graph file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("graph schema version {found} is not supported; expected version 1")]
    UnsupportedVersion { found: u32 },

    #[error("graph must declare at least one node")]
    EmptyGraph,

    #[error("node names must not be blank")]
    BlankNodeName,

    #[error("duplicate node '{node}'")]
    DuplicateNode { node: String },

    #[error("unknown node '{node}'")]
    UnknownNode { node: String },

    #[error("edge '{node}' - '{node}' connects a node to itself")]
    SelfLoop { node: String },

    #[error("duplicate edge between '{a}' and '{b}'")]
    DuplicateEdge { a: String, b: String },

    #[error("invalid length {value} on edge '{a}' - '{b}'")]
    InvalidLength { a: String, b: String, value: f64 },

    #[error("heuristic table references unknown goal '{goal}'")]
    UnknownHeuristicGoal { goal: String },

    #[error("heuristic table for goal '{goal}' references unknown node '{node}'")]
    UnknownHeuristicNode { goal: String, node: String },

    #[error("invalid heuristic value {value} for node '{node}' towards goal '{goal}'")]
    InvalidHeuristic {
        goal: String,
        node: String,
        value: f64,
    },

    #[error("no edge between '{a}' and '{b}'")]
    MissingEdge { a: String, b: String },

    #[error("no heuristic value for node '{node}' towards goal '{goal}'")]
    MissingHeuristic { goal: String, node: String },

    #[error("node key {key} is out of range")]
    UnknownNodeKey { key: usize },

    #[error("path must contain at least one node")]
    EmptyPath,
}

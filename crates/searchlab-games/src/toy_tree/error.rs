use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for loading and validating toy game trees.
pub enum TreeSpecError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("game tree must declare at least one node")]
    EmptyTree,

    #[error("node names must not be blank")]
    BlankNodeName,

    #[error("duplicate node '{node}'")]
    DuplicateNode { node: String },

    #[error("root '{root}' is not a declared node")]
    UnknownRoot { root: String },

    #[error("node '{parent}' lists unknown child '{child}'")]
    UnknownChild { parent: String, child: String },

    #[error("leaf '{node}' has no score")]
    LeafWithoutScore { node: String },

    #[error("node '{node}' has both a score and children")]
    ScoredInterior { node: String },

    #[error("invalid value {value} on node '{node}'")]
    InvalidValue { node: String, value: f64 },

    #[error("root '{root}' is listed as a child of '{parent}'")]
    RootHasParent { root: String, parent: String },

    #[error("node '{node}' is listed as a child more than once")]
    MultipleParents { node: String },

    #[error("node '{node}' is not reachable from the root")]
    Unreachable { node: String },
}

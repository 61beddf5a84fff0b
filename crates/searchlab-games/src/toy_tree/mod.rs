//! Small hand-written game trees, loaded from YAML.

mod error;
mod io;
mod spec;
mod tree;

pub use error::TreeSpecError;
pub use io::{compile_yaml, load_yaml};
pub use spec::{GameTreeSpec, ToyNodeSpec};
pub use tree::{ToyNode, ToyState, ToyTree, classic_tree, toy_heuristic};

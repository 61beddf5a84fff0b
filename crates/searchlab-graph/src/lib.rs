mod builder;
mod error;
mod graph;
mod io;
mod path;
mod spec;

pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{Edge, Graph, NodeKey, sort_by_cost};
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use path::Path;
pub use spec::{EdgeSpec, GRAPH_SCHEMA_VERSION, GraphSpec};

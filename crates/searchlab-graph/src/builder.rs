use crate::{EdgeSpec, GRAPH_SCHEMA_VERSION, Graph, GraphError, GraphSpec};

#[derive(Debug, Clone, Default)]
/// Struct to build graphs in code instead of YAML
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<EdgeSpec>,
    heuristic: Vec<(String, String, f64)>,
}

impl GraphBuilder {
    /// Create a new GraphBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node
    pub fn add_node(&mut self, name: impl Into<String>) -> &mut Self {
        self.nodes.push(name.into());
        self
    }

    /// Add several nodes at once
    pub fn add_nodes<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an undirected edge
    pub fn add_edge(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        length: f64,
    ) -> &mut Self {
        self.edges.push(EdgeSpec {
            a: a.into(),
            b: b.into(),
            length,
        });
        self
    }

    /// Record the heuristic estimate from `node` to `goal`
    pub fn set_heuristic(
        &mut self,
        goal: impl Into<String>,
        node: impl Into<String>,
        value: f64,
    ) -> &mut Self {
        self.heuristic.push((goal.into(), node.into(), value));
        self
    }

    /// Validate and return the serializable spec.
    /// Later heuristic entries for the same (goal, node) pair win.
    pub fn build_spec(&self) -> Result<GraphSpec, GraphError> {
        let mut spec = GraphSpec {
            version: Some(GRAPH_SCHEMA_VERSION),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            ..GraphSpec::default()
        };
        for (goal, node, value) in &self.heuristic {
            spec.heuristic
                .entry(goal.clone())
                .or_default()
                .insert(node.clone(), *value);
        }
        spec.validate()?;
        Ok(spec)
    }

    pub fn compile(&self) -> Result<Graph, GraphError> {
        self.build_spec()?.compile()
    }
}

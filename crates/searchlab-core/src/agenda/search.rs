use std::collections::HashSet;

use searchlab_graph::{Graph, GraphError, NodeKey, Path};

use crate::{
    agenda::{
        beam::beam_search,
        strategy::{Strategy, StrategyConfig},
    },
    error::SearchError,
};

/// Per-step events emitted by the generic search loop.
#[derive(Debug, Clone, Copy)]
pub enum SearchEvent<'a> {
    /// `path` was popped and its extensions were queued.
    Expanded {
        path: &'a Path,
        new_paths: usize,
        agenda_len: usize,
    },
    /// `path` was popped but its end node had already been extended.
    SkippedExtended { path: &'a Path },
    /// `path` reaches the goal; the search stops.
    Found { path: &'a Path },
    /// The agenda ran dry without reaching the goal.
    Exhausted,
}

/// Aggregate counters for one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expansions: usize,
    pub skipped: usize,
    pub max_agenda_len: usize,
}

impl SearchStats {
    pub(crate) fn record(&mut self, event: &SearchEvent<'_>) {
        match event {
            SearchEvent::Expanded { agenda_len, .. } => {
                self.expansions += 1;
                self.max_agenda_len = self.max_agenda_len.max(*agenda_len);
            }
            SearchEvent::SkippedExtended { .. } => self.skipped += 1,
            SearchEvent::Found { .. } | SearchEvent::Exhausted => {}
        }
    }
}

/// Search for a path from `start` to `goal` under `config`.
///
/// Returns `Ok(None)` when the goal is unreachable.
pub fn search(
    graph: &Graph,
    start: NodeKey,
    goal: NodeKey,
    config: &StrategyConfig,
) -> Result<Option<Path>, SearchError> {
    search_with_hook(graph, start, goal, config, |_| {})
}

/// Resolve node names, then run a named strategy.
pub fn search_named(
    graph: &Graph,
    start: &str,
    goal: &str,
    strategy: Strategy,
) -> Result<Option<Path>, SearchError> {
    let start = graph.require_node(start)?;
    let goal = graph.require_node(goal)?;
    search(graph, start, goal, &strategy.config())
}

/// Run a search and also return step counters.
pub fn search_with_stats(
    graph: &Graph,
    start: NodeKey,
    goal: NodeKey,
    config: &StrategyConfig,
) -> Result<(Option<Path>, SearchStats), SearchError> {
    let mut stats = SearchStats::default();
    let found = search_with_hook(graph, start, goal, config, |event| stats.record(event))?;
    Ok((found, stats))
}

/// Run a search and invoke a callback after every agenda step.
pub fn search_with_hook<F>(
    graph: &Graph,
    start: NodeKey,
    goal: NodeKey,
    config: &StrategyConfig,
    mut on_event: F,
) -> Result<Option<Path>, SearchError>
where
    F: FnMut(&SearchEvent<'_>),
{
    for node in [start, goal] {
        if graph.node_name(node).is_none() {
            return Err(GraphError::UnknownNodeKey { key: node.index() }.into());
        }
    }

    tracing::debug!(
        start = graph.node_name(start),
        goal = graph.node_name(goal),
        ?config,
        "starting graph search"
    );

    if let Some(width) = config.beam_width {
        return beam_search(graph, start, goal, config, width, &mut on_event);
    }

    let mut agenda = vec![Path::start(start)];
    let mut extended: HashSet<NodeKey> = HashSet::new();

    while !agenda.is_empty() {
        let path = agenda.remove(0);
        let last = path.last().ok_or(GraphError::EmptyPath)?;

        if config.use_extended_set && extended.contains(&last) {
            on_event(&SearchEvent::SkippedExtended { path: &path });
            continue;
        }

        if last == goal {
            tracing::debug!(nodes = path.len(), "graph search reached goal");
            on_event(&SearchEvent::Found { path: &path });
            return Ok(Some(path));
        }

        if config.use_extended_set {
            extended.insert(last);
        }

        let mut new_paths = graph.extensions(&path)?;
        config.sort_new_paths.apply(graph, goal, &mut new_paths)?;
        let new_count = new_paths.len();

        if config.add_to_front {
            let rest = std::mem::replace(&mut agenda, new_paths);
            agenda.extend(rest);
        } else {
            agenda.extend(new_paths);
        }
        config.sort_agenda.apply(graph, goal, &mut agenda)?;

        tracing::trace!(
            path = ?graph.path_names(&path),
            new_paths = new_count,
            agenda_len = agenda.len(),
            "expanded path"
        );
        on_event(&SearchEvent::Expanded {
            path: &path,
            new_paths: new_count,
            agenda_len: agenda.len(),
        });
    }

    tracing::debug!("graph search exhausted the agenda");
    on_event(&SearchEvent::Exhausted);
    Ok(None)
}

use std::collections::HashSet;

use searchlab_graph::{Graph, GraphError, NodeKey, Path};

use crate::{
    agenda::{search::SearchEvent, strategy::StrategyConfig},
    error::SearchError,
};

/// Level-synchronous beam search.
///
/// Paths on the current level are goal-tested and expanded in order; the
/// pooled extensions are ranked with `sort_agenda` and cut to `width`.
pub(crate) fn beam_search<F>(
    graph: &Graph,
    start: NodeKey,
    goal: NodeKey,
    config: &StrategyConfig,
    width: usize,
    on_event: &mut F,
) -> Result<Option<Path>, SearchError>
where
    F: FnMut(&SearchEvent<'_>),
{
    if width == 0 {
        return Err(SearchError::ZeroBeamWidth);
    }

    let mut level = vec![Path::start(start)];
    let mut extended: HashSet<NodeKey> = HashSet::new();

    while !level.is_empty() {
        let mut next_level = Vec::new();

        for path in &level {
            let last = path.last().ok_or(GraphError::EmptyPath)?;

            if config.use_extended_set && extended.contains(&last) {
                on_event(&SearchEvent::SkippedExtended { path });
                continue;
            }

            if last == goal {
                tracing::debug!(nodes = path.len(), "beam search reached goal");
                on_event(&SearchEvent::Found { path });
                return Ok(Some(path.clone()));
            }

            if config.use_extended_set {
                extended.insert(last);
            }

            let mut new_paths = graph.extensions(path)?;
            config.sort_new_paths.apply(graph, goal, &mut new_paths)?;
            let new_count = new_paths.len();
            next_level.extend(new_paths);

            on_event(&SearchEvent::Expanded {
                path,
                new_paths: new_count,
                agenda_len: next_level.len(),
            });
        }

        config.sort_agenda.apply(graph, goal, &mut next_level)?;
        if next_level.len() > width {
            tracing::trace!(
                dropped = next_level.len() - width,
                width,
                "beam trimmed level"
            );
            next_level.truncate(width);
        }
        level = next_level;
    }

    tracing::debug!("beam search ran out of paths");
    on_event(&SearchEvent::Exhausted);
    Ok(None)
}

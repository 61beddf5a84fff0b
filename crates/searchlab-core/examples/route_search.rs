use std::path::PathBuf;

use searchlab_core::{SearchConfig, Strategy, is_admissible, is_consistent, search_with_stats};
use searchlab_graph::compile_yaml;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/searchlab-core/examples/route.graph.yaml"));
    let start = args.next().unwrap_or_else(|| "S".to_string());
    let goal = args.next().unwrap_or_else(|| "G".to_string());

    let graph = compile_yaml(&path).expect("failed to compile graph YAML");
    let config = SearchConfig::from_default_yaml().expect("default config should parse");
    let start = graph.require_node(&start).expect("unknown start node");
    let goal = graph.require_node(&goal).expect("unknown goal node");

    let admissible = is_admissible(&graph, goal).expect("heuristic lookup failed");
    let consistent = is_consistent(&graph, goal).expect("heuristic lookup failed");
    println!("admissible={admissible} consistent={consistent}");

    for strategy in Strategy::ALL {
        let strategy_config = SearchConfig {
            strategy,
            ..config.clone()
        }
        .strategy_config();
        let (found, stats) =
            search_with_stats(&graph, start, goal, &strategy_config).expect("search failed");

        // A* keeps an extended set, so it needs the stronger heuristic property.
        let shortest_guaranteed = strategy.is_optimal()
            && match (strategy.uses_heuristic(), strategy) {
                (false, _) => true,
                (true, Strategy::AStar) => consistent,
                (true, _) => admissible,
            };
        let name = strategy.name();
        match found {
            Some(path) => println!(
                "{name}: {} length={} expansions={} shortest_guaranteed={shortest_guaranteed}",
                graph.path_names(&path).join("-"),
                graph.path_length(&path).expect("path edges exist"),
                stats.expansions
            ),
            None => println!("{name}: no path expansions={}", stats.expansions),
        }
    }
}

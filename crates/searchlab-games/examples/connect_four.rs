use searchlab_core::{AnytimeValue, GameState, SearchConfig, progressive_deepening_into};
use searchlab_games::{
    ConnectFourBoard, connect_four_state_faster, heuristic_connectfour, random_board,
};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(12345);

    let config = SearchConfig::from_default_yaml().expect("default config should parse");
    let depth = config.depth_limit.unwrap_or(4);

    let board: ConnectFourBoard = random_board(seed, 10);
    println!("{}  ({} to move)\n", board, board.current_player());

    let state = connect_four_state_faster(board);
    let mut anytime = AnytimeValue::new();
    progressive_deepening_into(
        &state,
        heuristic_connectfour,
        depth,
        config.maximize,
        &mut anytime,
        |slot| {
            let Some(round) = slot.history().last() else {
                return;
            };
            let has_move = slot.value().and_then(|value| value.best_move()).is_some();
            println!(
                "depth={} score={:.3} evaluations={} has_move={}",
                round.depth, round.score, round.evaluations, has_move
            );
        },
    );

    let Some(best) = anytime.value() else {
        println!("no rounds completed");
        return;
    };
    match best.best_move() {
        Some(next) => println!("\nbest reply:\n{}", next.snapshot()),
        None => println!("\nthe game is already over"),
    }
    println!("total_evaluations={}", anytime.total_evaluations());
}

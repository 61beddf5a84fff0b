pub mod alphabeta;
pub mod deepening;
pub mod dfs;
pub mod minimax;
pub mod result;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests;

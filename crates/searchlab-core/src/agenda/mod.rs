mod beam;
pub mod heuristics;
pub mod search;
pub mod strategy;

#[cfg(test)]
mod tests;

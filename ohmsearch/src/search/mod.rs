pub mod parallel;
pub mod series;

// Re-export for convenience
pub use parallel::{generate_parallel_groups, parallel_equivalent, ParallelGroup};
pub use series::{find_matches, Match};

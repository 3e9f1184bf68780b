pub mod io;
pub mod pairs;

pub use pairs::{pair_count, pair_indices, population_pairs};

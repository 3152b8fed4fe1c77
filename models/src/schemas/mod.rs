pub mod candidate;
pub mod competition;

pub mod candidates;
pub mod competitions;
pub mod votes;

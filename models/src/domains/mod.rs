//! `SeaORM` entities for the voting tables.

pub mod ballots;
pub mod candidates;
pub mod competitions;
pub mod votes;

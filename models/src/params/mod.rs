pub mod ballot;
pub mod candidate;
pub mod login;

mod db;
mod file;
pub mod testing;

pub use db::migrate;
pub use file::create_dev_db;

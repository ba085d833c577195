pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod dial;
pub mod edit;
pub mod export;
pub mod face;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod toggle;

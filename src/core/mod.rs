pub mod add;
pub mod backup;
pub mod del;
pub mod dial;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod log;
pub mod picker;
pub mod resolve;
pub mod toggle;

pub mod config;
pub mod discovery;
pub mod layout;
pub mod output;
pub mod sequence;
pub mod timestamp;

pub mod config;
pub mod list;
pub mod pagination;
pub mod table;
pub mod tree;

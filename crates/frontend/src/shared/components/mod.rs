pub mod data_table;
pub mod pagination_controls;
pub mod tree_select;

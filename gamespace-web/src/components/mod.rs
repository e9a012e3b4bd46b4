pub mod header;
pub mod search_box;
pub mod sidebar;

pub mod left;
pub mod menu;
pub mod sidebar;

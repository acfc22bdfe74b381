pub mod categories;
pub mod plant_list;
pub mod plants;
pub mod solar;
pub mod types;

pub mod commands;
pub mod menu_file;

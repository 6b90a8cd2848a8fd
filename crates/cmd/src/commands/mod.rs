pub mod cat;
pub mod list;
pub mod stat;
pub mod tree;

pub use cat::cat_command;
pub use list::list_command;
pub use stat::stat_command;
pub use tree::tree_command;

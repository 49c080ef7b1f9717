mod nav_group;
mod section_list;
mod sidebar;
mod transition;

pub use nav_group::*;
pub use section_list::*;
pub use sidebar::*;
pub use transition::*;

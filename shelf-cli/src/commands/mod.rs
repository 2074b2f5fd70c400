//! CLI command implementations

mod cat;
mod info;
mod list;
mod toc;

pub use cat::cat;
pub use info::info;
pub use list::list;
pub use toc::toc;

//! Shared page chrome.

mod layout;
mod nav;
mod pager;
mod select;

pub use layout::Layout;
pub use nav::Nav;
pub use pager::Pager;
pub use select::{NavSelect, SelectOption};

//! Console presentation gating
//!
//! Which sidebar entries, titles and action controls each role gets.

pub mod controls;
pub mod navigation;


pub use controls::{Control, ControlState, control_state, control_state_for, visible_controls};
pub use navigation::{
    NAV_ITEMS, NavGroup, NavItem, NavSection, page_title, sidebar, sidebar_for, visible_items,
};

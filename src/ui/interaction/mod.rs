//! Mouse interaction system.
//!
//! Render code registers clickable regions in a [`HitAreaRegistry`]; the event
//! loop hit-tests mouse clicks against it and hands the resulting
//! [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};

//! Domain objects for the portfolio.
//!
//! ## Domain Objects
//!
//! - [`Typewriter`] - Word-cycling typing/deleting effect for the hero banner
//! - [`ScrollState`] - Page offset, smooth scrolling and the scroll-to-top threshold
//! - [`Theme`] - Light/dark selection and the one-time system preference read
//! - [`Section`] - Navigable page sections and their anchors

pub mod scroll;
pub mod section;
pub mod theme;
pub mod typewriter;

pub use scroll::{ScrollState, ROW_UNITS, SCROLL_TOP_THRESHOLD};
pub use section::Section;
pub use theme::{detect_system_theme, Theme};
pub use typewriter::{Typewriter, TypewriterState};

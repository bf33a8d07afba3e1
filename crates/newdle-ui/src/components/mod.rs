//! Reusable UI components
//!
//! Toolbar buttons, badges, tooltips and layout helpers shared by the
//! poll pages.

mod button;
mod icon;
mod label;
mod layout;
mod popup;

pub use button::*;
pub use icon::*;
pub use label::*;
pub use layout::*;
pub use popup::*;

//! UI modules for the Globe Navigator application.
//!
//! The UI is split into distinct panels:
//! - Top bar: title, destination and status
//! - Left panel: country selector, layers and animation settings
//! - Central canvas: the globe
//! - Notification: blocking error window

mod canvas;
mod left_panel;
mod notification;
mod top_bar;

pub use canvas::render_canvas;
pub use left_panel::render_left_panel;
pub use notification::render_notification;
pub use top_bar::render_top_bar;

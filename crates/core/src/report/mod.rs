//! Static HTML report rendering.

mod html;

pub use html::{render_html, write_report};

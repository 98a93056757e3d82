//! UI building blocks rendered to HTML strings
//!
//! Components produce markup for static pages and model their interactive
//! behaviour separately, so the same value drives both the rendered page and
//! what a click does.

mod button;
mod icon;
mod style;

pub use button::{
    activate, classify, render, Action, ButtonConfig, ButtonVariant, History, Navigation,
    Navigator,
};
pub use icon::Icon;
pub use style::stylesheet;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

//! Static HTML report generation. Pure formatting over already-computed
//! results; the templates mirror the artifacts downstream tooling consumes.

pub mod html;

pub use html::{render_comparison_report, render_visualization};

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the poll's interaction surfaces and read or write the
//! page's poll/results state through props.

pub mod poll_canvas;
pub mod results_panel;

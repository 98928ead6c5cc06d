//! Canvas rendering and input engine for the monthly guess poll.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! hand-drawn poll canvas: laying out option regions, hit-testing pointer
//! positions, translating pointer and keyboard input into poll
//! [`engine::Action`]s, and drawing the sketch. It also owns the results bar
//! chart and the single-live-instance rule for it. The Leptos host is
//! responsible only for wiring DOM events to the engine and acting on the
//! resulting actions (submitting votes, fetching results).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`layout`] | Responsive placement of the question, options and results button |
//! | [`geom`] | Points and rectangles |
//! | [`input`] | Input event types and the canvas scene state |
//! | [`hit`] | Hit-testing against option regions and the results button |
//! | [`render`] | Sketch rendering |
//! | [`chart`] | Results bar chart model, renderer and [`chart::ChartSlot`] |
//! | [`consts`] | Shared numeric constants (canvas bounds, spacing, wobble) |

pub mod chart;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod layout;
pub mod render;

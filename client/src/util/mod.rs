//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic: label canonicalization, the localStorage voted flag, and DOM event
//! mapping for the canvas engine.

pub mod canvas_input;
pub mod labels;
pub mod vote_persistence;

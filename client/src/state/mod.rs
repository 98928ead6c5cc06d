//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `poll` owns the vote lifecycle and `results` owns the results fetch, so
//! the canvas and the results panel can each depend on a small focused model.

pub mod poll;
pub mod results;

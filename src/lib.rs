//! # FSE Models
//!
//! Fire safety engineering models and model-building tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate covers the thermal radiation checks of BR 187 (external fire
//! spread): configuration factors between a rectangular emitter and a receiver
//! point, and the unprotected-area / boundary-distance calculations built on
//! top of them.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code lives in a model's internal `core` module and
//! only moves to [`support`] once it is useful across models.

pub mod models;
pub mod support;

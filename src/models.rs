//! Public enrichment models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The [`twine_core::Model`] implementations
//! are thin adapters that delegate to the core API, which is also re-exported
//! so the formulas can be called directly.

pub mod enrichment;

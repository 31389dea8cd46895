//! # Isotope Separation
//!
//! An educational calculator for the simplified physics of binary isotope
//! separation: uranium enrichment, heavy water, and lithium isotopes.
//!
//! ## Crate layout
//!
//! - [`models`]: Enrichment physics (value function, separative work, ideal
//!   cascade stages, enrichment profiles) and [`twine_core::Model`] adapters.
//! - [`catalog`]: The worked examples offered by the interactive shell.
//! - [`shell`]: A console adapter that collects inputs and renders results.
//! - [`support`]: Constrained numeric types and isotope quantities used by models.
//!
//! The physics is a set of pure, closed-form functions. The shell is a thin
//! adapter over any reader/writer pair and can be replaced without touching
//! the models.
//!
//! ## Example
//!
//! ```
//! use isotope_separation::models::enrichment::SeparationParameters;
//! use uom::si::mass::kilogram;
//!
//! let params = SeparationParameters::from_fractions(1000.0, 0.045, 0.00711, 0.0025, 1.4)
//!     .expect("valid ordering");
//!
//! let work = params.separative_work();
//! assert!(work.feed.get::<kilogram>() > 9000.0);
//! assert!(params.stages().is_finite());
//! ```

pub mod catalog;
pub mod models;
pub mod shell;
pub mod support;

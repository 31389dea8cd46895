//! Closed-form enrichment physics.
//!
//! Everything here is a pure function of its inputs: the value function,
//! feed and separative work for a product, ideal-cascade stage counts, and
//! the schematic assay profile drawn along a cascade.

mod error;
mod parameters;
mod profile;
mod separative_work;
mod stages;
mod value;

pub use error::SeparationError;
pub use parameters::SeparationParameters;
pub use profile::{EnrichmentProfile, ProfileConfig};
pub use separative_work::{SeparativeWork, feed_mass, separative_work};
pub use stages::{StageCount, ideal_stages};
pub use value::{MAX_FRACTION, MIN_FRACTION, value_function};

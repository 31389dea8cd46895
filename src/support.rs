//! Supporting utilities used by the enrichment models.
//!
//! - [`constraint`]: Type-level numeric constraints checked at construction.
//! - [`isotope`]: Assay and separation factor quantities built on [`uom`].

pub mod constraint;
pub mod isotope;

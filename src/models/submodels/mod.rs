//! Composable equation submodels
//!
//! The full models in [`crate::models`] are assembled from these pieces:
//! [`electrolyte`] carries the conservation equations discretised over the
//! mesh, [`interface`] carries the interfacial reaction kinetics that feed
//! them.

pub mod electrolyte;
pub mod interface;

pub use electrolyte::StefanMaxwellDiffusion;
pub use interface::{ButlerVolmer, HomogeneousReaction};

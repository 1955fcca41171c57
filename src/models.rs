//! Public models.
//!
//! Models are organized into domain-specific submodules (e.g., `tribology`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the computation and domain logic lives. The public model
//! type is a thin wrapper that owns its state and delegates to `core`.

pub mod tribology;

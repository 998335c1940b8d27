//! Controllers shipped with every generated service.
//!
//! - [`ready`] - readiness probe backed by optional dependency probes

pub mod ready;

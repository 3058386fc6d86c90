//! SHISHUA Kernels
//!
//! State layout constants and the portable diffusion step.

pub mod constants;
pub mod portable;

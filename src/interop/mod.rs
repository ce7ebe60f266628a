//! Conversions to and from external linear-algebra types.
//!
//! Each integration is behind the Cargo feature of the same name.

#[cfg(feature = "glam")]
mod glam;
#[cfg(feature = "nalgebra")]
mod nalgebra;

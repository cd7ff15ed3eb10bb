#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Camera extrinsics conversions between world and camera frames.
pub mod extrinsics;

/// Linear algebra utilities.
pub mod linalg;

/// 3D transforms algorithms.
pub mod transforms;

mod utils;

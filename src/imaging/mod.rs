//! Image processing — decode, orient, resize, encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` |
//! | **Orient** | quarter turns from [`Rotation`] |
//! | **Resize** | Lanczos3 to a fixed height |
//! | **Encode** | JPEG, quality 75 |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining the profile + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::calculate_height_fit;
pub use operations::{encode_image, plan_transform};
pub use params::{EncodeProfile, EncodedImage, Quality, Rotation, TransformParams};
pub use rust_backend::RustBackend;

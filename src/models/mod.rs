//! Each color space/notation used by the engine is modeled with its own
//! type. Conversions are only implemented on the relevant models, making
//! every conversion path explicit and cheap.
//!
//! Conversions only operate on the 3 color components; alpha is carried by
//! the caller.

pub mod hsl;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use hsl::Hsl;
pub use lab::{Lab, Lch};
pub use rgb::{Srgb, SrgbLinear};
pub use xyz::Xyz;

//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// The D65 reference white that the XYZ and Lab models are relative to.
#[allow(clippy::excessive_precision)]
pub const WHITE_POINT: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);

tintlab_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space, relative to the D65
    /// white point.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

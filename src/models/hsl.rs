//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

tintlab_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// Hue is in degrees, saturation and lightness are percentages in
    /// `[0, 100]`.
    pub struct Hsl {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

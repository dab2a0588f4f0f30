//! Model a color in the sRGB color space.

use crate::{
    color::Component,
    math::{transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

/// Tags that specify whether components carry the sRGB transfer function.
pub mod encoding {
    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding {}

    /// Tag for components with the sRGB transfer function applied.
    #[derive(Clone, Debug)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Tag for components that are proportional to light intensity.
    #[derive(Clone, Debug)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

tintlab_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl Rgb<encoding::GammaEncoded> {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> Rgb<encoding::LinearLight> {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs < 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            })
            .into()
    }
}

impl Rgb<encoding::LinearLight> {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Rgb<encoding::GammaEncoded> {
        self.to_components()
            .map(|value| {
                let abs = value.abs();

                if abs > 0.0031308 {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                } else {
                    12.92 * value
                }
            })
            .into()
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}

impl From<Xyz> for Rgb<encoding::LinearLight> {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn gamma_round_trip() {
        let srgb = Srgb::new(0.823529, 0.411765, 0.117647);
        let back = srgb.to_linear_light().to_gamma_encoded();
        assert_component_eq!(back.red, srgb.red);
        assert_component_eq!(back.green, srgb.green);
        assert_component_eq!(back.blue, srgb.blue);
    }

    #[test]
    fn white_maps_to_the_reference_white() {
        let xyz = Srgb::new(1.0, 1.0, 1.0).to_linear_light().to_xyz();
        assert_component_eq!(xyz.x, crate::models::xyz::WHITE_POINT.0);
        assert_component_eq!(xyz.y, crate::models::xyz::WHITE_POINT.1);
        assert_component_eq!(xyz.z, crate::models::xyz::WHITE_POINT.2);
    }

    #[test]
    fn xyz_round_trip() {
        let linear = SrgbLinear::new(0.644480, 0.141263, 0.012983);
        let back = SrgbLinear::from(linear.to_xyz());
        assert_component_eq!(back.red, linear.red);
        assert_component_eq!(back.green, linear.green);
        assert_component_eq!(back.blue, linear.blue);
    }
}

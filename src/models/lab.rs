//! Models for the rectangular and polar forms of the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    math::{almost_zero, normalize_hue},
    models::xyz::{Xyz, WHITE_POINT},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

tintlab_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if almost_zero(chroma) {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Lch::new(self.lightness, chroma, hue)
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            let v = (lightness + 16.0) / 116.0;
            v * v * v
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * WHITE_POINT.0,
            y * WHITE_POINT.1,
            z * WHITE_POINT.2,
        )
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let adapted = Components(
            value.x / WHITE_POINT.0,
            value.y / WHITE_POINT.1,
            value.z / WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

tintlab_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// cylindrical polar form.
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, in degrees.
        pub hue: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_is_all_lightness() {
        let lab = Lab::from(Xyz::new(WHITE_POINT.0, WHITE_POINT.1, WHITE_POINT.2));
        assert_component_eq!(lab.lightness, 100.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
    }

    #[test]
    fn black_is_zero() {
        let lab = Lab::from(Xyz::new(0.0, 0.0, 0.0));
        assert_component_eq!(lab.lightness, 0.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
    }

    #[test]
    fn converting_to_polar_keeps_hue_in_degrees() {
        let lab = Lab::new(50.0, 0.0, 40.0);
        let polar = lab.to_polar();
        assert_component_eq!(polar.chroma, 40.0);
        assert_component_eq!(polar.hue, 90.0);
    }

    #[test]
    fn achromatic_polar_form_has_zero_hue() {
        let polar = Lab::new(50.0, 0.0, 0.0).to_polar();
        assert_eq!(polar.hue, 0.0);
        assert_eq!(polar.chroma, 0.0);
    }

    #[test]
    fn polar_round_trip() {
        let lab = Lab::new(56.6293, 39.2371, 57.5538);
        let back = lab.to_polar().to_rectangular();
        approx::assert_abs_diff_eq!(back.lightness, lab.lightness, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(back.a, lab.a, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(back.b, lab.b, epsilon = 1.0e-3);
    }

    #[test]
    fn xyz_round_trip() {
        let lab = Lab::new(56.6293, 39.2371, 57.5538);
        let back = Lab::from(lab.to_xyz());
        // The knee makes the inverse slightly lossier than the polar form.
        approx::assert_abs_diff_eq!(back.lightness, lab.lightness, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(back.a, lab.a, epsilon = 1.0e-3);
        approx::assert_abs_diff_eq!(back.b, lab.b, epsilon = 1.0e-3);
    }
}

//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A transformation matrix holding the 3x3 matrices used for converting
/// between color spaces.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from the 9 values of a 3x3 matrix.
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Normalize a hue, in degrees, into the range `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Whether a value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_normalization_wraps_both_directions() {
        assert_eq!(normalize_hue(380.0), 20.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(200.0), 200.0);
    }

    #[test]
    fn identity_transform_keeps_components() {
        let m = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let c = transform(&m, Components(0.1, 0.2, 0.3));
        assert_eq!(c, Components(0.1, 0.2, 0.3));
    }
}

use image::{Rgba, RgbaImage};
use tintlab::models::Hsl;
use tintlab::{generate, Role, ScaleMode, TokenSet};

const SWATCH_SIZE: u32 = 80;

fn main() {
    let tokens = TokenSet::default();

    let scales = Role::ALL.map(|role| {
        (
            generate(&tokens[role], ScaleMode::Hsl),
            generate(&tokens[role], ScaleMode::Perceptual),
        )
    });

    let columns = scales
        .iter()
        .map(|(hsl, _)| hsl.len())
        .max()
        .unwrap_or(1) as u32;

    // Two rows per role: the HSL ramp above its perceptual counterpart.
    let width = columns * SWATCH_SIZE;
    let height = scales.len() as u32 * 2 * SWATCH_SIZE;

    let mut img = RgbaImage::new(width, height);
    img.fill(255);

    for (row, (hsl_scale, perceptual_scale)) in scales.iter().enumerate() {
        draw_ramp(&mut img, row as u32 * 2, hsl_scale);
        draw_ramp(&mut img, row as u32 * 2 + 1, perceptual_scale);
    }

    img.save("swatches.png")
        .expect("could not write image to swatches.png");
}

fn draw_ramp(img: &mut RgbaImage, row: u32, scale: &[tintlab::Swatch]) {
    for (column, swatch) in scale.iter().enumerate() {
        let srgb = Hsl::new(
            swatch.color.hue,
            swatch.color.saturation,
            swatch.color.lightness,
        )
        .to_srgb();

        let pixel = Rgba([
            (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]);

        let x0 = column as u32 * SWATCH_SIZE;
        let y0 = row * SWATCH_SIZE;
        for y in y0..y0 + SWATCH_SIZE {
            for x in x0..x0 + SWATCH_SIZE {
                img.put_pixel(x, y, pixel);
            }
        }
    }
}

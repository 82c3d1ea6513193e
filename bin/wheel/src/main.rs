use colorize::{Component, Hsl, Model};
use image::{Rgba, RgbaImage};

const SIZE: u32 = 300;

// Rotation of the wheel, putting pure red at 30 degrees above the x axis.
const OFFSET: Component = 30.0;

fn main() {
    let mut img = RgbaImage::new(SIZE, SIZE);
    img.fill(255);

    let center = SIZE as Component / 2.0;
    let max_radius = (SIZE - 2) as Component / 2.0;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as Component - center;
        let dy = center - y as Component;

        let radius = (dx * dx + dy * dy).sqrt();
        if radius > max_radius {
            continue;
        }

        // Fully saturated at the rim, fading to white in the center.
        let hue = (dy.atan2(dx).to_degrees() - OFFSET).rem_euclid(360.0);
        let lightness = 1.0 - 0.5 * (radius / max_radius);

        let rgb = Hsl::new(hue, 1.0, lightness).to_rgb();
        *pixel = Rgba([rgb.red, rgb.green, rgb.blue, 255]);
    }

    img.save("wheel.png")
        .expect("could not write image to wheel.png");
}

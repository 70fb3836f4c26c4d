//! Sprite loading and pre-processing.
//!
//! Source art comes as photos on a flat backdrop. Before the game loop
//! starts, each image is chroma-keyed against the backdrop color sampled
//! from its top-left pixel, then cropped to the bounding box of its
//! remaining opaque pixels, and only then uploaded as a texture.

use macroquad::prelude::*;

use crate::game::SPRITE_SCALE;

/// Per-channel tolerance when matching the sampled background color.
const BACKGROUND_TOLERANCE: i16 = 30;

pub struct Sprites {
    player: Texture2D,
    companion: Texture2D,
    petting: Texture2D,
    petting_scale: f32,
    font: Font,
}

async fn load_font() -> Font {
    let path = "assets/DejaVuSans.ttf";
    load_ttf_font(path)
        .await
        .unwrap_or_else(|e| panic!("Failed to load {path}: {e:?}"))
}

async fn load_sprite(path: &str) -> Texture2D {
    let mut image = load_image(path)
        .await
        .unwrap_or_else(|e| panic!("Failed to load {path}: {e:?}"));
    mask_background(&mut image);
    if opaque_bounds(&image).is_none() {
        log::warn!("{path} has no opaque pixels left after background removal");
    }
    let image = trim_to_content(&image);
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Linear);
    texture
}

impl Sprites {
    pub async fn load() -> Self {
        let player = load_sprite("sprites/player.png").await;
        let companion = load_sprite("sprites/companion.png").await;
        let petting = load_sprite("sprites/petting.png").await;
        // The petting pose includes both figures, so its raw height differs
        // from the walking sprite. Scale it so the player stays the same
        // height on screen.
        let petting_scale = player.height() / petting.height() * SPRITE_SCALE;
        Self {
            player,
            companion,
            petting,
            petting_scale,
            font: load_font().await,
        }
    }

    pub(crate) fn player(&self) -> &Texture2D {
        &self.player
    }

    pub(crate) fn companion(&self) -> &Texture2D {
        &self.companion
    }

    pub(crate) fn petting(&self) -> &Texture2D {
        &self.petting
    }

    pub(crate) fn petting_scale(&self) -> f32 {
        self.petting_scale
    }

    pub(crate) fn font(&self) -> &Font {
        &self.font
    }
}

/// Clear the alpha of every pixel whose color matches the backdrop.
///
/// The backdrop color is sampled from the top-left pixel; a pixel matches
/// when each of its R, G and B channels is within [`BACKGROUND_TOLERANCE`]
/// of the sample. Alpha plays no part in matching.
pub(crate) fn mask_background(image: &mut Image) {
    let data = image.get_image_data_mut();
    let Some(&[bg_r, bg_g, bg_b, _]) = data.first() else {
        return;
    };
    for pixel in data.iter_mut() {
        let [r, g, b, _] = *pixel;
        if channel_close(r, bg_r) && channel_close(g, bg_g) && channel_close(b, bg_b) {
            pixel[3] = 0;
        }
    }
}

fn channel_close(a: u8, b: u8) -> bool {
    (a as i16 - b as i16).abs() <= BACKGROUND_TOLERANCE
}

/// Inclusive bounding box (min_x, min_y, max_x, max_y) of all pixels with
/// nonzero alpha, or None for a fully transparent image.
pub(crate) fn opaque_bounds(image: &Image) -> Option<(u32, u32, u32, u32)> {
    let width = image.width() as u32;
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (i, pixel) in image.get_image_data().iter().enumerate() {
        if pixel[3] == 0 {
            continue;
        }
        let x = i as u32 % width;
        let y = i as u32 / width;
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }
    bounds
}

/// Crop the image to its opaque bounding box.
/// A fully transparent image is returned unchanged.
pub(crate) fn trim_to_content(image: &Image) -> Image {
    let Some((min_x, min_y, max_x, max_y)) = opaque_bounds(image) else {
        return image.clone();
    };
    image.sub_image(Rect::new(
        min_x as f32,
        min_y as f32,
        (max_x - min_x + 1) as f32,
        (max_y - min_y + 1) as f32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u16, height: u16, pixels: &[[u8; 4]]) -> Image {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Image {
            bytes: pixels.iter().flatten().copied().collect(),
            width,
            height,
        }
    }

    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    #[test]
    fn background_removal_keys_on_top_left_pixel() {
        let backdrop = [200, 50, 50, 255];
        let subject = [10, 10, 10, 255];
        let mut img = image(2, 2, &[backdrop, subject, backdrop, subject]);
        mask_background(&mut img);
        let data = img.get_image_data();
        assert_eq!(data[0][3], 0);
        assert_eq!(data[1], subject);
        assert_eq!(data[2][3], 0);
        assert_eq!(data[3], subject);
    }

    #[test]
    fn background_tolerance_is_inclusive_per_channel() {
        let backdrop = [200, 50, 50, 255];
        let at_tolerance = [230, 70, 60, 255];
        let past_tolerance = [231, 50, 50, 255];
        let mut img = image(3, 1, &[backdrop, at_tolerance, past_tolerance]);
        mask_background(&mut img);
        let data = img.get_image_data();
        assert_eq!(data[1][3], 0);
        assert_eq!(data[2][3], 255);
    }

    #[test]
    fn uniform_image_goes_fully_transparent() {
        let backdrop = [87, 206, 235, 255];
        let mut img = image(3, 3, &[backdrop; 9]);
        mask_background(&mut img);
        assert_eq!(opaque_bounds(&img), None);
    }

    #[test]
    fn opaque_bounds_spans_all_opaque_pixels() {
        let mark = [9, 9, 9, 255];
        let mut pixels = [CLEAR; 16];
        pixels[1 * 4 + 1] = mark; // (1, 1)
        pixels[3 * 4 + 2] = mark; // (2, 3)
        let img = image(4, 4, &pixels);
        assert_eq!(opaque_bounds(&img), Some((1, 1, 2, 3)));
    }

    #[test]
    fn opaque_bounds_of_transparent_image_is_none() {
        let img = image(4, 4, &[CLEAR; 16]);
        assert_eq!(opaque_bounds(&img), None);
    }

    #[test]
    fn trim_crops_to_the_bounding_box() {
        let mark = [9, 9, 9, 255];
        let mut pixels = [CLEAR; 16];
        pixels[1 * 4 + 1] = mark;
        pixels[3 * 4 + 2] = mark;
        let img = image(4, 4, &pixels);
        let trimmed = trim_to_content(&img);
        assert_eq!((trimmed.width(), trimmed.height()), (2, 3));
        // Top-left of the crop is the old (1, 1).
        assert_eq!(trimmed.get_image_data()[0], mark);
        // Bottom-right of the crop is the old (2, 3).
        assert_eq!(trimmed.get_image_data()[5], mark);
    }

    #[test]
    fn trim_keeps_fully_transparent_image_unchanged() {
        let img = image(4, 2, &[CLEAR; 8]);
        let trimmed = trim_to_content(&img);
        assert_eq!((trimmed.width(), trimmed.height()), (4, 2));
    }

    #[test]
    fn trim_is_identity_for_fully_opaque_image() {
        let mark = [120, 30, 60, 255];
        let img = image(2, 2, &[mark; 4]);
        let trimmed = trim_to_content(&img);
        assert_eq!((trimmed.width(), trimmed.height()), (2, 2));
        assert_eq!(trimmed.get_image_data(), img.get_image_data());
    }
}

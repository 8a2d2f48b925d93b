//! pixelplay-ops: Pure pixel-array transformations (sans-IO).
//!
//! Decodes an uploaded image once into an RGB buffer, then applies one of
//! fifteen independent transformations to it:
//! grayscale, channel split, invert, crop, brightness, flips, rotations,
//! threshold, salt-and-pepper noise, zoom, and negative.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and image buffers. All browser/filesystem interaction
//! lives in `pixelplay-io` and the front-end binaries.

pub mod color;
pub mod decode;
pub mod geometry;
pub mod noise;
pub mod operation;
pub mod params;
pub mod types;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use color::Channel;
pub use decode::decode_rgb;
pub use operation::{Operation, UnknownOperation};
pub use params::{CropBox, Params};
pub use types::{Dimensions, GrayImage, OpsError, Panel, Raster, Rendering, RgbImage};

/// Apply `operation` to `source`.
///
/// Noise draws from `params.noise_seed` when set, otherwise from the
/// thread-local generator.
///
/// # Errors
///
/// Returns [`OpsError::InvalidCrop`] for an empty, inverted, or
/// out-of-bounds crop box, and [`OpsError::InvalidParameter`] for a zoom
/// factor below 1.0 or a noise amount outside `0.0..=1.0`.
pub fn apply(
    source: &RgbImage,
    operation: Operation,
    params: &Params,
) -> Result<Rendering, OpsError> {
    match params.noise_seed {
        Some(seed) => apply_with_rng(source, operation, params, &mut StdRng::seed_from_u64(seed)),
        None => apply_with_rng(source, operation, params, &mut rand::thread_rng()),
    }
}

/// Apply `operation` to `source`, drawing any randomness from `rng`.
///
/// `params.noise_seed` is ignored.
///
/// # Errors
///
/// See [`apply`].
pub fn apply_with_rng<R: Rng + ?Sized>(
    source: &RgbImage,
    operation: Operation,
    params: &Params,
    rng: &mut R,
) -> Result<Rendering, OpsError> {
    let dims = Dimensions::of(source);
    tracing::debug!(
        operation = operation.name(),
        width = dims.width,
        height = dims.height,
        "applying operation"
    );

    let rendering = match operation {
        Operation::Original => Rendering::single("Original Image", Raster::Rgb(source.clone())),

        Operation::Grayscale => {
            Rendering::single("Grayscale Image", Raster::Gray(color::grayscale(source)))
        }

        Operation::ChannelSplit => {
            let [red, green, blue] = color::split_channels(source)
                .map(|(channel, image)| Panel::new(channel.caption(), Raster::Rgb(image)));
            Rendering::split(red, [green, blue])
        }

        Operation::Invert => {
            Rendering::single("Inverted Colors", Raster::Rgb(color::invert(source)))
        }

        Operation::Crop => {
            let (left, right, top, bottom) = params.crop.resolve(dims);
            let cropped = geometry::crop(source, left, right, top, bottom)?;
            Rendering::single("Cropped Image", Raster::Rgb(cropped))
        }

        Operation::Brightness => Rendering::single(
            format!("Brightness Adjusted by {}", params.brightness),
            Raster::Rgb(color::adjust_brightness(source, params.brightness)),
        ),

        Operation::FlipHorizontal => Rendering::single(
            "Horizontally Flipped",
            Raster::Rgb(geometry::flip_horizontal(source)),
        ),

        Operation::FlipVertical => Rendering::single(
            "Vertically Flipped",
            Raster::Rgb(geometry::flip_vertical(source)),
        ),

        Operation::Rotate90 => Rendering::single(
            "Rotated 90° Clockwise",
            Raster::Rgb(geometry::rotate_90(source)),
        ),

        Operation::Rotate180 => {
            Rendering::single("Rotated 180°", Raster::Rgb(geometry::rotate_180(source)))
        }

        Operation::Rotate270 => Rendering::single(
            "Rotated 270° Clockwise",
            Raster::Rgb(geometry::rotate_270(source)),
        ),

        Operation::Threshold => Rendering::single(
            format!("Thresholded at {}", params.threshold),
            Raster::Gray(color::threshold(source, params.threshold)),
        ),

        Operation::SaltAndPepper => {
            let noisy = noise::salt_and_pepper(source, params.noise_amount, rng)?;
            Rendering::single(
                format!(
                    "Added Salt & Pepper Noise ({:.1}%)",
                    params.noise_amount * 100.0
                ),
                Raster::Rgb(noisy),
            )
        }

        Operation::Zoom => {
            let zoomed = geometry::zoom(source, params.zoom_factor)?;
            Rendering::single(
                format!("Zoomed by factor {:.1}", params.zoom_factor),
                Raster::Rgb(zoomed),
            )
        }

        Operation::Negative => Rendering::single(
            "Image Negative (Manual Invert)",
            Raster::Rgb(color::negative(source)),
        ),
    };

    Ok(rendering)
}

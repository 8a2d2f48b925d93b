//! Algebraic properties of the operations, checked over random images.

#![allow(clippy::unwrap_used)]

use pixelplay_ops::{CropBox, Operation, Params, Raster, RgbImage, color, geometry, noise};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random RGB images from 1x1 up to 12x12.
fn arb_image() -> impl Strategy<Value = RgbImage> {
    (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), (w * h * 3) as usize)
            .prop_map(move |raw| RgbImage::from_raw(w, h, raw).unwrap())
    })
}

proptest! {
    #[test]
    fn invert_is_an_involution(img in arb_image()) {
        prop_assert_eq!(color::invert(&color::invert(&img)), img);
    }

    #[test]
    fn negative_is_an_involution_and_matches_invert(img in arb_image()) {
        prop_assert_eq!(color::negative(&color::negative(&img)), img.clone());
        prop_assert_eq!(color::negative(&img), color::invert(&img));
    }

    #[test]
    fn four_quarter_turns_are_identity(img in arb_image()) {
        let once = geometry::rotate_90(&img);
        let twice = geometry::rotate_90(&once);
        let thrice = geometry::rotate_90(&twice);
        prop_assert_eq!(geometry::rotate_90(&thrice), img);
    }

    #[test]
    fn rotate_90_then_270_is_identity(img in arb_image()) {
        prop_assert_eq!(geometry::rotate_270(&geometry::rotate_90(&img)), img);
    }

    #[test]
    fn flips_are_involutions(img in arb_image()) {
        prop_assert_eq!(
            geometry::flip_horizontal(&geometry::flip_horizontal(&img)),
            img.clone()
        );
        prop_assert_eq!(
            geometry::flip_vertical(&geometry::flip_vertical(&img)),
            img
        );
    }

    #[test]
    fn threshold_output_is_binary(img in arb_image(), cutoff in any::<u8>()) {
        let out = color::threshold(&img, cutoff);
        prop_assert!(out.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn brightness_zero_is_identity(img in arb_image()) {
        prop_assert_eq!(color::adjust_brightness(&img, 0), img);
    }

    #[test]
    fn brightness_is_a_clamped_shift(img in arb_image(), delta in -100i16..=100) {
        let out = color::adjust_brightness(&img, delta);
        for (a, b) in img.as_raw().iter().zip(out.as_raw()) {
            let expected = (i32::from(*a) + i32::from(delta)).clamp(0, 255);
            prop_assert_eq!(i32::from(*b), expected);
        }
    }

    #[test]
    fn crop_with_empty_range_fails_as_warning(
        img in arb_image(),
        left in 0u32..16,
        shrink in 0u32..4,
    ) {
        let right = left.saturating_sub(shrink);
        let p = Params {
            crop: CropBox { left, right: Some(right), top: 0, bottom: None },
            ..Params::default()
        };
        let err = pixelplay_ops::apply(&img, Operation::Crop, &p).unwrap_err();
        prop_assert!(err.is_warning());
    }

    #[test]
    fn valid_crop_has_requested_size(
        img in arb_image(),
        a in 0u32..12, b in 0u32..12, c in 0u32..12, d in 0u32..12,
    ) {
        let (w, h) = img.dimensions();
        let (left, right) = (a.min(b) % w, a.max(b) % w + 1);
        let (top, bottom) = (c.min(d) % h, c.max(d) % h + 1);
        prop_assume!(left < right && top < bottom);
        let out = geometry::crop(&img, left, right, top, bottom).unwrap();
        prop_assert_eq!(out.dimensions(), (right - left, bottom - top));
    }

    #[test]
    fn zoom_preserves_dimensions(img in arb_image(), tenths in 10u32..=30) {
        let factor = f64::from(tenths) / 10.0;
        let out = geometry::zoom(&img, factor).unwrap();
        prop_assert_eq!(out.dimensions(), img.dimensions());
    }

    #[test]
    fn channel_split_reconstructs_source(img in arb_image()) {
        let [(_, r), (_, g), (_, b)] = color::split_channels(&img);
        for (x, y, p) in img.enumerate_pixels() {
            let [r0, r1, r2] = r.get_pixel(x, y).0;
            let [g0, g1, g2] = g.get_pixel(x, y).0;
            let [b0, b1, b2] = b.get_pixel(x, y).0;
            prop_assert_eq!((r1, r2, g0, g2, b0, b1), (0, 0, 0, 0, 0, 0));
            prop_assert_eq!([r0, g1, b2], p.0);
        }
    }

    #[test]
    fn zero_noise_is_identity(img in arb_image(), seed in any::<u64>()) {
        let out = noise::salt_and_pepper(&img, 0.0, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(out, img);
    }

    #[test]
    fn every_operation_preserves_or_swaps_dimensions(img in arb_image(), seed in any::<u64>()) {
        let p = Params { noise_seed: Some(seed), ..Params::default() };
        let (w, h) = img.dimensions();
        for op in Operation::ALL {
            let rendering = pixelplay_ops::apply(&img, op, &p).unwrap();
            for panel in rendering.panels() {
                let d = panel.raster.dimensions();
                let dims = (d.width, d.height);
                match op {
                    Operation::Rotate90 | Operation::Rotate270 => prop_assert_eq!(dims, (h, w)),
                    _ => prop_assert_eq!(dims, (w, h)),
                }
                let single_channel = matches!(panel.raster, Raster::Gray(_));
                prop_assert_eq!(
                    single_channel,
                    matches!(op, Operation::Grayscale | Operation::Threshold)
                );
            }
        }
    }
}

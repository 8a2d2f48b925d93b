//! pixelplay-cli: apply one pixelplay operation to an image file.
//!
//! Decodes the input, runs the chosen operation with parameters taken
//! from flags (or a JSON `Params` document), and writes each resulting
//! panel as a PNG. Channel split writes three files.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin pixelplay-cli -- [OPTIONS] <IMAGE_PATH>
//! cargo run --release --bin pixelplay-cli -- --list
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use image::ImageFormat;
use pixelplay_ops::{Channel, CropBox, Operation, Params, Raster};
use tracing_subscriber::EnvFilter;

/// Apply an elementary pixel-array transformation to an image.
///
/// Writes the result as PNG. Operations that produce several images
/// (channel split) write one file per image with a channel suffix.
#[derive(Parser)]
#[command(name = "pixelplay-cli", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    #[arg(required_unless_present = "list")]
    image_path: Option<PathBuf>,

    /// Operation to apply (see `--list`).
    #[arg(long = "op", default_value = "original")]
    operation: Operation,

    /// First kept column when cropping.
    #[arg(long, default_value_t = 0)]
    left: u32,

    /// One past the last kept column when cropping [default: image width].
    #[arg(long)]
    right: Option<u32>,

    /// First kept row when cropping.
    #[arg(long, default_value_t = 0)]
    top: u32,

    /// One past the last kept row when cropping [default: image height].
    #[arg(long)]
    bottom: Option<u32>,

    /// Brightness offset (-100 to 100).
    #[arg(long, default_value_t = Params::DEFAULT_BRIGHTNESS, allow_negative_numbers = true)]
    brightness: i16,

    /// Threshold cutoff; grayscale values above it become white.
    #[arg(long, default_value_t = Params::DEFAULT_THRESHOLD)]
    threshold: u8,

    /// Salt-and-pepper noise amount (0.0 to 0.1).
    #[arg(long, default_value_t = Params::DEFAULT_NOISE_AMOUNT)]
    noise_amount: f64,

    /// Zoom factor (1.0 to 3.0).
    #[arg(long, default_value_t = Params::DEFAULT_ZOOM_FACTOR)]
    zoom: f64,

    /// Seed for the noise generator, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Full parameter set as a JSON string.
    ///
    /// When provided, all other parameter flags are ignored, except that
    /// `--seed` fills in a missing `noise_seed`. The JSON must be a valid
    /// `Params` serialization; missing fields take their defaults.
    #[arg(long)]
    params_json: Option<String>,

    /// Output path [default: `<IMAGE stem>-<operation>.png` beside the input].
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the available operations and exit.
    #[arg(long)]
    list: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Build [`Params`] from CLI arguments.
///
/// If `--params-json` is provided, the JSON is parsed directly and the
/// individual parameter flags are ignored. Either way the result is
/// range-checked.
fn params_from_cli(cli: &Cli) -> Result<Params, String> {
    let mut params = if let Some(ref json) = cli.params_json {
        serde_json::from_str(json).map_err(|e| format!("Error parsing --params-json: {e}"))?
    } else {
        Params {
            crop: CropBox {
                left: cli.left,
                right: cli.right,
                top: cli.top,
                bottom: cli.bottom,
            },
            brightness: cli.brightness,
            threshold: cli.threshold,
            noise_amount: cli.noise_amount,
            noise_seed: cli.seed,
            zoom_factor: cli.zoom,
        }
    };

    if params.noise_seed.is_none() {
        params.noise_seed = cli.seed;
    }

    params.validate().map_err(|e| e.to_string())?;
    Ok(params)
}

/// `<stem>-<operation>.png` in the input's directory.
fn default_output(input: &Path, operation: Operation) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "image".to_owned(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}-{}.png", operation.name()))
}

/// One output path per panel.
///
/// A single panel is written to `base` as is. Several panels get a
/// channel suffix before the extension: `out.png` becomes `out-red.png`,
/// `out-green.png`, `out-blue.png`.
fn output_paths(base: &Path, panels: usize) -> Vec<PathBuf> {
    if panels <= 1 {
        return vec![base.to_path_buf()];
    }

    let stem = base
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    let ext = base
        .extension()
        .map_or_else(|| "png".to_owned(), |e| e.to_string_lossy().into_owned());

    (0..panels)
        .map(|i| {
            let suffix = Channel::ALL
                .get(i)
                .map_or_else(|| (i + 1).to_string(), |c| c.name().to_owned());
            base.with_file_name(format!("{stem}-{suffix}.{ext}"))
        })
        .collect()
}

/// Write a raster as PNG regardless of the path's extension.
fn write_png(raster: &Raster, path: &Path) -> Result<(), image::ImageError> {
    match raster {
        Raster::Rgb(img) => img.save_with_format(path, ImageFormat::Png),
        Raster::Gray(img) => img.save_with_format(path, ImageFormat::Png),
    }
}

/// Decode, transform, and write. Returns the paths written.
fn run(cli: &Cli, image_path: &Path) -> Result<Vec<PathBuf>, String> {
    let params = params_from_cli(cli)?;

    let image_bytes = std::fs::read(image_path)
        .map_err(|e| format!("Error reading {}: {e}", image_path.display()))?;

    tracing::info!(
        path = %image_path.display(),
        bytes = image_bytes.len(),
        operation = cli.operation.name(),
        "processing image"
    );
    tracing::debug!(?params, "resolved parameters");

    let source = pixelplay_ops::decode_rgb(&image_bytes).map_err(|e| e.to_string())?;
    let rendering = pixelplay_ops::apply(&source, cli.operation, &params).map_err(|e| {
        if e.is_warning() {
            format!("Warning: {e}")
        } else {
            format!("Error: {e}")
        }
    })?;

    let base = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(image_path, cli.operation));
    let paths = output_paths(&base, rendering.len());

    for (panel, path) in rendering.panels().iter().zip(&paths) {
        write_png(&panel.raster, path)
            .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
        tracing::debug!(caption = %panel.caption, path = %path.display(), "wrote panel");
    }

    Ok(paths)
}

/// Print every operation name with its menu label.
fn print_operations() {
    let width = Operation::ALL
        .iter()
        .map(|op| op.name().len())
        .max()
        .unwrap_or(0);
    for op in Operation::ALL {
        println!("{:<width$}  {}", op.name(), op.label());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.list {
        print_operations();
        return ExitCode::SUCCESS;
    }

    let Some(ref image_path) = cli.image_path else {
        eprintln!("Missing input image path");
        return ExitCode::FAILURE;
    };

    match run(&cli, image_path) {
        Ok(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pixelplay-cli").chain(args.iter().copied())).unwrap()
    }

    /// A scratch directory unique to this test.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pixelplay-cli-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn defaults_match_params_defaults() {
        let cli = parse(&["in.png"]);
        assert_eq!(cli.operation, Operation::Original);
        assert_eq!(params_from_cli(&cli).unwrap(), Params::default());
    }

    #[test]
    fn flags_fill_params() {
        let cli = parse(&[
            "in.png",
            "--op",
            "crop",
            "--left",
            "2",
            "--right",
            "8",
            "--bottom",
            "5",
            "--brightness",
            "-40",
            "--zoom",
            "2.5",
            "--seed",
            "9",
        ]);
        let p = params_from_cli(&cli).unwrap();
        assert_eq!(cli.operation, Operation::Crop);
        assert_eq!(
            p.crop,
            CropBox {
                left: 2,
                right: Some(8),
                top: 0,
                bottom: Some(5),
            }
        );
        assert_eq!(p.brightness, -40);
        assert!((p.zoom_factor - 2.5).abs() < f64::EPSILON);
        assert_eq!(p.noise_seed, Some(9));
    }

    #[test]
    fn unknown_operation_is_a_parse_error() {
        let args = ["pixelplay-cli", "in.png", "--op", "sepia"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn image_path_is_optional_only_with_list() {
        assert!(Cli::try_parse_from(["pixelplay-cli", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["pixelplay-cli"]).is_err());
    }

    #[test]
    fn params_json_overrides_flags() {
        let cli = parse(&[
            "in.png",
            "--threshold",
            "10",
            "--params-json",
            r#"{"threshold": 200}"#,
        ]);
        let p = params_from_cli(&cli).unwrap();
        assert_eq!(p.threshold, 200);
        assert_eq!(p.brightness, Params::DEFAULT_BRIGHTNESS);
    }

    #[test]
    fn seed_fills_missing_json_seed() {
        let cli = parse(&["in.png", "--seed", "4", "--params-json", "{}"]);
        assert_eq!(params_from_cli(&cli).unwrap().noise_seed, Some(4));

        let cli = parse(&["in.png", "--seed", "4", "--params-json", r#"{"noise_seed": 1}"#]);
        assert_eq!(params_from_cli(&cli).unwrap().noise_seed, Some(1));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let cli = parse(&["in.png", "--brightness", "150"]);
        assert!(params_from_cli(&cli).unwrap_err().contains("brightness"));

        let cli = parse(&["in.png", "--zoom", "0.5"]);
        assert!(params_from_cli(&cli).is_err());
    }

    #[test]
    fn bad_json_is_reported() {
        let cli = parse(&["in.png", "--params-json", "{not json"]);
        assert!(
            params_from_cli(&cli)
                .unwrap_err()
                .starts_with("Error parsing --params-json")
        );
    }

    #[test]
    fn default_output_sits_beside_input() {
        let path = default_output(Path::new("photos/cat.jpg"), Operation::Rotate90);
        assert_eq!(path, Path::new("photos/cat-rotate-90.png"));
    }

    #[test]
    fn single_panel_uses_base_path() {
        let base = Path::new("out/result.png");
        assert_eq!(output_paths(base, 1), vec![base.to_path_buf()]);
    }

    #[test]
    fn channel_split_gets_channel_suffixes() {
        let paths = output_paths(Path::new("out/result.png"), 3);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("out/result-red.png"),
                PathBuf::from("out/result-green.png"),
                PathBuf::from("out/result-blue.png"),
            ]
        );
    }

    #[test]
    fn run_writes_png_files() {
        let dir = scratch_dir("run");
        let input = dir.join("input.png");
        RgbImage::from_pixel(8, 6, Rgb([200, 40, 90]))
            .save(&input)
            .unwrap();

        let input_arg = input.to_string_lossy().into_owned();
        let cli = parse(&[&input_arg, "--op", "rotate-90"]);
        let written = run(&cli, &input).unwrap();
        assert_eq!(written, vec![dir.join("input-rotate-90.png")]);
        let out = image::open(&written[0]).unwrap();
        assert_eq!((out.width(), out.height()), (6, 8));

        let cli = parse(&[&input_arg, "--op", "channel-split"]);
        let written = run(&cli, &input).unwrap();
        assert_eq!(written.len(), 3);
        let red = image::open(&written[0]).unwrap().to_rgb8();
        assert_eq!(red.get_pixel(0, 0).0, [200, 0, 0]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn run_reports_invalid_crop_as_warning() {
        let dir = scratch_dir("crop");
        let input = dir.join("input.png");
        RgbImage::new(4, 4).save(&input).unwrap();

        let input_arg = input.to_string_lossy().into_owned();
        let cli = parse(&[&input_arg, "--op", "crop", "--left", "3", "--right", "2"]);
        let err = run(&cli, &input).unwrap_err();
        assert!(err.starts_with("Warning: invalid crop"), "{err}");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn run_reports_missing_file() {
        let cli = parse(&["does-not-exist.png"]);
        let err = run(&cli, Path::new("does-not-exist.png")).unwrap_err();
        assert!(err.starts_with("Error reading"));
    }
}

//! Per-operation parameter controls.
//!
//! Renders the sliders that belong to the selected operation. Operations
//! without parameters show a short note instead.

use dioxus::prelude::*;
use pixelplay_ops::{Dimensions, Operation, Params};

/// Props for the [`OperationControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct OperationControlsProps {
    /// Currently selected operation (determines which controls to show).
    operation: Operation,
    /// Current parameters (read-only).
    params: Params,
    /// Size of the decoded source, bounding the crop sliders.
    dimensions: Dimensions,
    /// Callback fired when any parameter changes.
    on_params_change: EventHandler<Params>,
}

/// Renders parameter controls for the selected operation.
///
/// - **Crop**: left/right and top/bottom sliders in two columns
/// - **Brightness**: offset slider
/// - **Threshold**: cutoff slider
/// - **Salt & Pepper**: noise amount slider
/// - **Zoom**: magnification slider
/// - everything else: no controls
#[component]
#[allow(clippy::too_many_lines)]
pub fn OperationControls(props: OperationControlsProps) -> Element {
    if !props.operation.has_parameters() {
        return rsx! {
            p { class: "text-secondary italic",
                "No adjustable parameters for this operation."
            }
        };
    }

    let params = &props.params;
    let on_change = props.on_params_change;

    match props.operation {
        Operation::Crop => {
            let dims = props.dimensions;
            let (left, right, top, bottom) = params.crop.resolve(dims);
            let max_x = f64::from(dims.width);
            let max_y = f64::from(dims.height);
            let (p_left, p_right, p_top, p_bottom) =
                (params.clone(), params.clone(), params.clone(), params.clone());
            rsx! {
                p { class: "text-secondary", "Adjust cropping region" }
                div { class: "columns",
                    div { class: "column",
                        {render_slider(
                            "crop_left",
                            "Left",
                            f64::from(left),
                            0.0,
                            (max_x - 1.0).max(0.0),
                            1.0,
                            0,
                            move |v: f64| {
                                let mut p = p_left.clone();
                                p.crop.left = to_pixel(v);
                                on_change.call(p);
                            },
                        )}
                        {render_slider(
                            "crop_right",
                            "Right",
                            f64::from(right),
                            1.0,
                            max_x,
                            1.0,
                            0,
                            move |v: f64| {
                                let mut p = p_right.clone();
                                p.crop.right = Some(to_pixel(v));
                                on_change.call(p);
                            },
                        )}
                    }
                    div { class: "column",
                        {render_slider(
                            "crop_top",
                            "Top",
                            f64::from(top),
                            0.0,
                            (max_y - 1.0).max(0.0),
                            1.0,
                            0,
                            move |v: f64| {
                                let mut p = p_top.clone();
                                p.crop.top = to_pixel(v);
                                on_change.call(p);
                            },
                        )}
                        {render_slider(
                            "crop_bottom",
                            "Bottom",
                            f64::from(bottom),
                            1.0,
                            max_y,
                            1.0,
                            0,
                            move |v: f64| {
                                let mut p = p_bottom.clone();
                                p.crop.bottom = Some(to_pixel(v));
                                on_change.call(p);
                            },
                        )}
                    }
                }
            }
        }

        Operation::Brightness => {
            let range = Params::BRIGHTNESS_RANGE;
            let params = params.clone();
            rsx! {
                {render_slider(
                    "brightness",
                    "Brightness (-100 to 100)",
                    f64::from(params.brightness),
                    f64::from(*range.start()),
                    f64::from(*range.end()),
                    1.0,
                    0,
                    move |v: f64| {
                        let mut p = params.clone();
                        #[allow(clippy::cast_possible_truncation)]
                        {
                            p.brightness = v
                                .round()
                                .clamp(f64::from(*range.start()), f64::from(*range.end()))
                                as i16;
                        }
                        on_change.call(p);
                    },
                )}
            }
        }

        Operation::Threshold => {
            let params = params.clone();
            rsx! {
                {render_slider(
                    "threshold",
                    "Threshold value",
                    f64::from(params.threshold),
                    0.0,
                    255.0,
                    1.0,
                    0,
                    move |v: f64| {
                        let mut p = params.clone();
                        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                        { p.threshold = v.round().clamp(0.0, 255.0) as u8; }
                        on_change.call(p);
                    },
                )}
            }
        }

        Operation::SaltAndPepper => {
            let params = params.clone();
            rsx! {
                {render_slider(
                    "noise_amount",
                    "Noise Amount (0-0.1)",
                    params.noise_amount,
                    0.0,
                    Params::NOISE_AMOUNT_MAX,
                    Params::NOISE_AMOUNT_STEP,
                    2,
                    move |v: f64| {
                        let mut p = params.clone();
                        p.noise_amount = v.clamp(0.0, Params::NOISE_AMOUNT_MAX);
                        on_change.call(p);
                    },
                )}
            }
        }

        Operation::Zoom => {
            let range = Params::ZOOM_FACTOR_RANGE;
            let params = params.clone();
            rsx! {
                {render_slider(
                    "zoom_factor",
                    "Zoom factor",
                    params.zoom_factor,
                    *range.start(),
                    *range.end(),
                    Params::ZOOM_FACTOR_STEP,
                    1,
                    move |v: f64| {
                        let mut p = params.clone();
                        p.zoom_factor = v.clamp(*range.start(), *range.end());
                        on_change.call(p);
                    },
                )}
            }
        }

        _ => rsx! {},
    }
}

/// Slider value to a pixel coordinate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixel(v: f64) -> u32 {
    v.round().max(0.0) as u32
}

/// Render a labeled range slider with a live value readout.
#[allow(clippy::too_many_arguments)]
fn render_slider(
    id: &str,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    decimals: usize,
    on_input: impl Fn(f64) + 'static,
) -> Element {
    let display = format!("{value:.decimals$}");
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "field",
            div { class: "field-header",
                label { r#for: "{id}", class: "field-label", "{label}" }
                span { class: "text-secondary tabular-nums", "{display}" }
            }
            input {
                r#type: "range",
                id: "{id}",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                class: "slider",
                oninput: move |e| {
                    match e.value().parse::<f64>() {
                        Ok(v) => on_input(v),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("slider parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
        }
    }
}

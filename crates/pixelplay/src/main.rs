use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use pixelplay_io::{
    FileUpload, Notice, NoticeBox, OperationControls, OperationSelect, RenderingView,
};
use pixelplay_ops::{CropBox, Dimensions, Operation, Params, Raster, Rendering, RgbImage};

/// Shown in the browser tab and as the page heading.
const PAGE_TITLE: &str = "Pixel Playground";

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Holds the session state as Dioxus signals: the uploaded bytes, the
/// decoded source, the selected operation and its parameters, and the
/// latest result. Wires together the upload, select, controls, and
/// result components.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Session state ---
    let mut image_bytes = use_signal(|| Option::<Vec<u8>>::None);
    let mut source = use_signal(|| Option::<Rc<RgbImage>>::None);
    let mut original = use_signal(|| Option::<Rc<Rendering>>::None);
    let mut operation = use_signal(Operation::default);
    let mut params = use_signal(Params::default);
    let mut rendering = use_signal(|| Option::<Rc<Rendering>>::None);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut decoding = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut decode_generation = use_signal(|| 0u64);
    let mut generation = use_signal(|| 0u64);

    // --- File upload handler ---
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        debug!(name = %name, bytes = bytes.len(), "image uploaded");
        source.set(None);
        original.set(None);
        rendering.set(None);
        notice.set(None);
        image_bytes.set(Some(bytes));
    };

    // --- Decode effect ---
    // Runs once per upload. The crop box is reset to the full frame of
    // the new image.
    use_effect(move || {
        let Some(bytes) = image_bytes() else {
            return;
        };

        decode_generation += 1;
        let my_generation = *decode_generation.peek();
        decoding.set(true);

        spawn(async move {
            // Let the browser paint the loading state first.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = pixelplay_ops::decode_rgb(&bytes);

            if *decode_generation.peek() != my_generation {
                return;
            }

            match outcome {
                Ok(img) => {
                    let shown = Rendering::single("Original Image", Raster::Rgb(img.clone()));
                    original.set(Some(Rc::new(shown)));
                    params.write().crop = CropBox::full();
                    source.set(Some(Rc::new(img)));
                }
                Err(e) => {
                    warn!("decode failed: {e}");
                    notice.set(Some(Notice::from(&e)));
                }
            }

            decoding.set(false);
        });
    });

    // --- Operation effect ---
    // Re-runs whenever the source, the operation, or the parameters
    // change.
    use_effect(move || {
        let current = source();
        let op = operation();
        let p = params();

        // Any run still in flight is now stale.
        generation += 1;
        let my_generation = *generation.peek();

        let Some(img) = current else {
            rendering.set(None);
            processing.set(false);
            return;
        };

        processing.set(true);

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = pixelplay_ops::apply(&img, op, &p);

            if *generation.peek() != my_generation {
                return;
            }

            match outcome {
                Ok(res) => {
                    rendering.set(Some(Rc::new(res)));
                    notice.set(None);
                }
                Err(e) => {
                    if !e.is_warning() {
                        warn!("{op} failed: {e}");
                    }
                    rendering.set(None);
                    notice.set(Some(Notice::from(&e)));
                }
            }

            processing.set(false);
        });
    });

    let on_select = move |op: Operation| {
        operation.set(op);
    };

    let on_params_change = move |new_params: Params| {
        params.set(new_params);
    };

    // --- Layout ---
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "{PAGE_TITLE}" }
                p { class: "text-muted",
                    "Upload an image and explore 15 different pixel-array transformations!"
                }
            }

            FileUpload { on_upload: on_upload }

            if let Some(ref shown) = original() {
                RenderingView {
                    heading: "Original Image",
                    rendering: Rc::clone(shown),
                }
            }

            if let Some(ref img) = source() {
                section { class: "controls",
                    OperationSelect {
                        selected: operation(),
                        on_select: on_select,
                    }
                    OperationControls {
                        operation: operation(),
                        params: params(),
                        dimensions: Dimensions::of(&**img),
                        on_params_change: on_params_change,
                    }
                }
            }

            if let Some(ref n) = notice() {
                NoticeBox { notice: n.clone() }
            }

            if decoding() || processing() {
                p { class: "text-secondary pulse", "Processing..." }
            } else if let Some(ref res) = rendering() {
                RenderingView {
                    heading: operation().label().to_owned(),
                    rendering: Rc::clone(res),
                }
            } else if image_bytes.read().is_none() {
                div { class: "notice notice-info",
                    p { "Please upload an image to get started." }
                }
            }
        }
    }
}

//! Captioned image panels for an operation result.

use std::rc::Rc;

use dioxus::prelude::*;
use pixelplay_ops::{Panel, Rendering};

use crate::raster;

/// Props for the [`RenderingView`] component.
#[derive(Props, Clone)]
pub struct RenderingViewProps {
    /// Section heading shown above the panels.
    heading: String,
    /// The panels to show.
    rendering: Rc<Rendering>,
}

impl PartialEq for RenderingViewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.rendering, &other.rendering) && self.heading == other.heading
    }
}

/// Blob URLs created by the most recent render of a [`RenderingView`].
#[derive(Debug, Default)]
struct LiveUrls(Vec<String>);

impl LiveUrls {
    fn track(&mut self, url: String) {
        self.0.push(url);
    }

    /// Forget every tracked URL and return them for revocation.
    fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.0)
    }
}

/// A heading followed by every panel of a [`Rendering`], each with its
/// caption underneath.
///
/// Multi-panel renderings (channel split) lay their panels out side by
/// side.
#[component]
pub fn RenderingView(props: RenderingViewProps) -> Element {
    // An <img> replaced or unmounted before it loads never fires onload,
    // so URLs from the previous render are revoked here and on drop.
    let mut live: Signal<LiveUrls> = use_signal(LiveUrls::default);

    use_drop(move || {
        for url in &live.peek().0 {
            raster::revoke_blob_url(url);
        }
    });

    for url in live.write().drain() {
        raster::revoke_blob_url(&url);
    }

    let grid_class = if props.rendering.len() > 1 {
        "panel-grid multi"
    } else {
        "panel-grid"
    };

    rsx! {
        section { class: "result",
            h2 { class: "section-heading", "{props.heading}" }
            div { class: "{grid_class}",
                for panel in props.rendering.panels() {
                    {render_panel(panel, live)}
                }
            }
        }
    }
}

/// Render one panel as an `<img>` with a caption.
///
/// The Blob URL is revoked once the browser has loaded the image or
/// given up on it.
fn render_panel(panel: &Panel, mut live: Signal<LiveUrls>) -> Element {
    let caption = panel.caption.clone();

    match raster::raster_to_blob_url(&panel.raster) {
        Ok(url) => {
            live.write().track(url.clone());
            let url_for_error = url.clone();
            rsx! {
                figure { class: "panel",
                    img {
                        src: "{url}",
                        class: "panel-image",
                        alt: "{caption}",
                        onload: move |_| raster::revoke_blob_url(&url),
                        onerror: move |_| raster::revoke_blob_url(&url_for_error),
                    }
                    figcaption { class: "caption", "{caption}" }
                }
            }
        }
        Err(e) => rsx! {
            figure { class: "panel",
                div { class: "panel-error text-error", "Failed to display image: {e}" }
                figcaption { class: "caption", "{caption}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_every_tracked_url_once() {
        let mut live = LiveUrls::default();
        live.track("blob:a".to_owned());
        live.track("blob:b".to_owned());
        assert_eq!(live.drain(), ["blob:a", "blob:b"]);
        assert!(live.drain().is_empty());
    }

    #[test]
    fn tracking_after_drain_starts_fresh() {
        let mut live = LiveUrls::default();
        live.track("blob:old".to_owned());
        let _ = live.drain();
        live.track("blob:new".to_owned());
        assert_eq!(live.drain(), ["blob:new"]);
    }
}

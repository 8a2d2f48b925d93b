//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Allowed file extensions for image uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Value for the picker's `accept` attribute, e.g. `.jpg,.jpeg,.png`.
fn accept_attribute() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Human-readable list of accepted types, e.g. `JPG, JPEG, PNG`.
fn accepted_types() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Message shown when `name` does not carry an allowed extension.
fn unsupported_message(name: &str) -> String {
    format!("Unsupported file type: {name} (expected {})", accepted_types())
}

/// Check whether a filename has an allowed image extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with the raw file bytes and filename after a successful upload.
    on_upload: EventHandler<(Vec<u8>, String)>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts JPEG and PNG images. When a file is selected (via the picker
/// or drag-and-drop), reads the bytes and fires `on_upload` with
/// `(bytes, filename)`.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Shared by the picker and drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            if !has_allowed_extension(&name) {
                error.set(Some(unsupported_message(&name)));
                return;
            }
            match file.read_bytes().await {
                Ok(bytes) => {
                    filename.set(Some(name.clone()));
                    error.set(None);
                    props.on_upload.call((bytes.to_vec(), name));
                }
                Err(e) => {
                    error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let accept = accept_attribute();
    let types = accepted_types();

    let zone_class = if dragging() {
        "upload-zone dragging"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref name) = filename() {
                p { class: "text-success", "Loaded: {name}" }
            }

            if let Some(ref err) = error() {
                p { class: "text-error", "{err}" }
            }

            p { class: "text-secondary", "Drop an image here or " }

            label { class: "button",
                input {
                    r#type: "file",
                    accept: "{accept}",
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose an image..."
            }

            p { class: "text-muted small", "Upload an image ({types})" }
        }
    }
}

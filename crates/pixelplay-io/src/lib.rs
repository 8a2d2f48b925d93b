//! pixelplay-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads, PNG encoding of operation results into Blob
//! URLs, and provides the reusable UI components for the pixelplay web
//! application.

pub mod components;
pub mod notice;
pub mod raster;

pub use components::{FileUpload, NoticeBox, OperationControls, OperationSelect, RenderingView};
pub use notice::Notice;

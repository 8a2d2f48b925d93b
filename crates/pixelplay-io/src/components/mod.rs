//! Dioxus UI components for pixelplay.
//!
//! Provides the file upload zone, the operation selector, per-operation
//! parameter sliders, captioned result panels, and notice boxes.

mod notice_box;
mod operation_controls;
mod operation_select;
mod result_view;
mod upload;

pub use notice_box::NoticeBox;
pub use operation_controls::OperationControls;
pub use operation_select::OperationSelect;
pub use result_view::RenderingView;
pub use upload::FileUpload;

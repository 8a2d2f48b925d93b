//! Warning and error boxes.

use dioxus::prelude::*;

use crate::notice::Notice;

/// Props for the [`NoticeBox`] component.
#[derive(Props, Clone, PartialEq)]
pub struct NoticeBoxProps {
    notice: Notice,
}

/// A colored box holding a single [`Notice`].
#[component]
pub fn NoticeBox(props: NoticeBoxProps) -> Element {
    let class = if props.notice.is_warning() {
        "notice notice-warning"
    } else {
        "notice notice-error"
    };
    let role = if props.notice.is_warning() {
        "status"
    } else {
        "alert"
    };

    rsx! {
        div { class: "{class}", role: "{role}",
            p { "{props.notice.message()}" }
        }
    }
}

//! Drop-down list of the available operations.

use dioxus::prelude::*;
use pixelplay_ops::Operation;

/// Props for the [`OperationSelect`] component.
#[derive(Props, Clone, PartialEq)]
pub struct OperationSelectProps {
    /// Currently selected operation.
    selected: Operation,
    /// Callback fired when the user picks a different operation.
    on_select: EventHandler<Operation>,
}

/// A labeled `<select>` listing every [`Operation`] in menu order.
///
/// Option values are the stable operation names; the visible text is
/// the menu label.
#[component]
pub fn OperationSelect(props: OperationSelectProps) -> Element {
    let selected = props.selected;
    let on_select = props.on_select;

    rsx! {
        div { class: "field",
            label { r#for: "operation", class: "field-label", "Select Image Processing Operation" }
            select {
                id: "operation",
                class: "select",
                value: "{selected.name()}",
                onchange: move |e| {
                    match Operation::from_name(&e.value()) {
                        Some(op) => on_select.call(op),
                        None => {
                            web_sys::console::warn_1(
                                &format!("unknown operation in select: {:?}", e.value()).into(),
                            );
                        }
                    }
                },

                for op in Operation::ALL {
                    option {
                        value: "{op.name()}",
                        selected: op == selected,
                        "{op.label()}"
                    }
                }
            }
        }
    }
}

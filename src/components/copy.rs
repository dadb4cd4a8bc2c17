use crate::prelude::*;

use crate::{
    components::svg::{ContentCopy, DrawSvg, SvgSize::Size4},
    utils::CCStr,
};

/// Button copying exactly `value` to the clipboard, labelled by its children
#[component]
pub fn CopyToClipboardButton(value: CCStr, children: Element) -> Element {
    let clipboard_service = state_management::use_clipboard_service();
    rsx! {
        button {
            class: "btn btn-ghost btn-xs",
            onclick: move |_| state_management::copy_to_clipboard(clipboard_service, &value),
            DrawSvg::<ContentCopy> { size: Size4 }
            {children}
        }
    }
}

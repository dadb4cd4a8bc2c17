use crate::prelude::*;

/// Shows a spinner in place of its children while `loading` is set
#[component]
pub fn Loading(loading: bool, children: Element) -> Element {
    if loading {
        rsx! {
            div { class: "flex justify-center py-6",
                span { class: "loading loading-spinner loading-md" }
            }
        }
    } else {
        children
    }
}

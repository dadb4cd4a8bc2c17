use crate::prelude::*;

use crate::{
    components::svg::{CheckCircle, DrawSvg, SvgSize::Size12},
    utils::CCStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Success,
}

/// Centered card with an optional status icon, a title and an optional subtitle
#[component]
pub fn CardLayout(
    icon: Option<CardIcon>,
    title: CCStr,
    subtitle: Option<CCStr>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center p-4",
            div { class: "card card-border bg-base-100 shadow-xl w-full max-w-md",
                div { class: "card-body flex flex-col gap-4 min-h-[32rem]",
                    if let Some(CardIcon::Success) = icon {
                        div { class: "flex justify-center text-success",
                            DrawSvg::<CheckCircle> { size: Size12 }
                        }
                    }
                    h1 { class: "text-2xl font-bold text-center", "{title}" }
                    if let Some(subtitle) = subtitle {
                        h2 { class: "text-base font-light text-center", "{subtitle}" }
                    }
                    {children}
                }
            }
        }
    }
}

use crate::prelude::*;

use crate::{
    components::svg::{ArrowRight, CheckCircle, DrawSvg, SvgSize::Size6, SvgSize::Size8},
    Route,
};

/// Main wallet screen, the root route of the application
#[component]
pub fn WalletHomeView() -> Element {
    log::debug!("WalletHomeView Rendered");

    let status = *state_management::KEYRING_STATUS.read();

    use_drop(|| log::debug!("WalletHomeView Dropped"));

    rsx! {
        div { class: "hero min-h-screen",
            div { class: "hero-content flex-col text-center",
                h1 { class: "text-5xl font-bold", "Wallet" }
                {match status {
                    KeyringStatus::Empty => rsx! {
                        p { class: "text-base-content/70", "No wallet has been set up yet." }
                        button {
                            class: "btn btn-primary btn-lg",
                            onclick: move |_| {
                                navigator().push(Route::InitializeView {});
                            },
                            "Get Started"
                            DrawSvg::<ArrowRight> { size: Size6 }
                        }
                    },
                    KeyringStatus::Created | KeyringStatus::Imported => rsx! {
                        div { class: "text-success",
                            DrawSvg::<CheckCircle> { size: Size8 }
                        }
                        p { class: "text-base-content/70",
                            if status == KeyringStatus::Created {
                                "Your new wallet is ready."
                            } else {
                                "Your imported wallet is ready."
                            }
                        }
                    },
                }}
            }
        }
    }
}

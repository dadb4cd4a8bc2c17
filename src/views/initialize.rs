use crate::prelude::*;

use crate::{
    components::svg::{Download, DrawSvg, PlusCircle, SvgSize::Size6},
    utils::log_error,
    Route,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Create,
    Import,
}

/// First onboarding page: create a fresh wallet or import one from a recovery phrase
#[component]
pub fn InitializeView() -> Element {
    log::debug!("InitializeView Rendered");

    let keyring_service = state_management::use_keyring_service();

    let mut pending = use_signal(|| None::<Pending>);
    let mut import_phrase = use_signal(String::new);

    let word_count = use_memo(|| state_management::APPLICATION_CONFIG.read().mnemonic_word_count);

    let create_click = move |_| async move {
        log::debug!("InitializeView: creating a new wallet");
        *pending.write() = Some(Pending::Create);
        match state_management::create_wallet(keyring_service, word_count()).await {
            Ok(()) => {
                navigator().push(Route::BackupView {});
            }
            Err(e) => alert_error(log_error(e)),
        }
        *pending.write() = None;
    };

    let import_click = move |_| async move {
        log::debug!("InitializeView: importing a wallet");
        *pending.write() = Some(Pending::Import);
        match state_management::import_wallet(keyring_service, import_phrase()).await {
            Ok(()) => {
                import_phrase.set(String::new());
                alert_success("Recovery phrase imported");
                navigator().push(Route::BackupImportedView {});
            }
            Err(e) => alert_error(log_error(e)),
        }
        *pending.write() = None;
    };

    use_drop(|| log::debug!("InitializeView Dropped"));

    rsx! {
        div { class: "min-h-screen flex items-center justify-center p-4",
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 w-full max-w-3xl",
                div { class: "card card-border bg-base-100 shadow-xl",
                    div { class: "card-body gap-4",
                        h2 { class: "card-title", "Create a new wallet" }
                        p { class: "text-sm text-base-content/70",
                            "A new recovery phrase will be generated. You will be shown it once the wallet is ready."
                        }
                        label { class: "flex items-center gap-2",
                            span { class: "text-sm", "Words" }
                            select {
                                class: "select select-sm w-20",
                                value: "{word_count()}",
                                disabled: pending().is_some(),
                                onchange: move |evt| {
                                    if let Ok(count) = evt.parsed::<WordCount>() {
                                        state_management::APPLICATION_CONFIG.write().mnemonic_word_count = count;
                                    }
                                },
                                option { value: "12", "12" }
                                option { value: "24", "24" }
                            }
                        }
                        div { class: "grow" }
                        button {
                            class: "btn btn-primary",
                            disabled: pending().is_some(),
                            onclick: create_click,
                            if pending() == Some(Pending::Create) {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Creating..."
                            } else {
                                DrawSvg::<PlusCircle> { size: Size6 }
                                "Create Wallet"
                            }
                        }
                    }
                }
                div { class: "card card-border bg-base-100 shadow-xl",
                    div { class: "card-body gap-4",
                        h2 { class: "card-title", "Import an existing wallet" }
                        textarea {
                            class: "textarea textarea-bordered font-mono text-sm w-full",
                            rows: 4,
                            placeholder: "Enter your recovery phrase, words separated by spaces",
                            autocomplete: "off",
                            spellcheck: false,
                            value: "{import_phrase()}",
                            disabled: pending().is_some(),
                            oninput: move |evt| import_phrase.set(evt.value()),
                        }
                        button {
                            class: "btn btn-secondary",
                            disabled: pending().is_some() || import_phrase.read().trim().is_empty(),
                            onclick: import_click,
                            if pending() == Some(Pending::Import) {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Importing..."
                            } else {
                                DrawSvg::<Download> { size: Size6 }
                                "Import Wallet"
                            }
                        }
                    }
                }
            }
        }
    }
}

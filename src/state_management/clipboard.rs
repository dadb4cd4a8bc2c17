use dioxus::prelude::*;

use futures_util::stream::StreamExt;

use crate::prelude::{alert_error, alert_info};

#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardCommand {
    Set(String),
}

pub(super) fn use_clipboard_service() -> Coroutine<ClipboardCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<ClipboardCommand>| async move {
            log::info!("clipboard_service (coroutine) - start");

            let mut clipboard = platform::Clipboard::new();

            while let Some(cmd) = rx.next().await {
                // The payload may be a recovery phrase, keep it out of the logs
                log::debug!("clipboard_service (coroutine) - Processing command...");
                match cmd {
                    ClipboardCommand::Set(str) => match clipboard.as_mut() {
                        Some(clipboard) => match clipboard.set_text(str).await {
                            Ok(_) => alert_info("Copied to Clipboard!"),
                            Err(e) => {
                                log::warn!("Clipboard write failed: {e}");
                                alert_error("Failed to copy to Clipboard!")
                            }
                        },
                        None => {
                            alert_error("No Clipboard service!");
                        }
                    },
                }
                log::debug!("clipboard_service (coroutine) - Command processed");
            }
        },
    )
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use crate::prelude::alert_warn;

    pub struct Clipboard(arboard::Clipboard);
    impl Clipboard {
        pub fn new() -> Option<Self> {
            match arboard::Clipboard::new() {
                Ok(c) => Some(Self(c)),
                Err(e) => {
                    log::warn!("Clipboard service failed to init: {e}");
                    alert_warn("Failed to initialize Clipboard!");
                    None
                }
            }
        }
        pub async fn set_text(&mut self, text: String) -> Result<(), String> {
            self.0.set_text(text).map_err(|e| e.to_string())
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use crate::prelude::alert_warn;

    pub struct Clipboard(web_sys::Clipboard);
    impl Clipboard {
        pub fn new() -> Option<Self> {
            match web_sys::window() {
                Some(window) => Some(Self(window.navigator().clipboard())),
                None => {
                    log::warn!("Clipboard service failed to init: no window");
                    alert_warn("Failed to initialize Clipboard!");
                    None
                }
            }
        }
        pub async fn set_text(&mut self, text: String) -> Result<(), String> {
            wasm_bindgen_futures::JsFuture::from(self.0.write_text(&text))
                .await
                .map(|_| ())
                .map_err(|e| format!("{e:?}"))
        }
    }
}

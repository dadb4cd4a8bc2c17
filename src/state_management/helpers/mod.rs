mod clipboard;
mod keyring;

use dioxus::prelude::*;

use tokio::sync::oneshot;

use crate::utils::CCStr;

use super::{
    clipboard::ClipboardCommand,
    config::WordCount,
    keyring::{KeyringCommand, KeyringError},
};

pub use clipboard::*;
pub use keyring::*;

pub fn use_keyring_service() -> Coroutine<KeyringCommand> {
    use_coroutine_handle()
}

pub fn use_clipboard_service() -> Coroutine<ClipboardCommand> {
    use_coroutine_handle()
}

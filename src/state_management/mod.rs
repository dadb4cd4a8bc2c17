mod clipboard;
mod config;
mod helpers;
mod keyring;

pub fn use_init_services() {
    log::debug!("init_services - start");
    let _ = keyring::use_keyring_service();
    let _ = clipboard::use_clipboard_service();
    log::debug!("init_services - finished");
}

pub mod prelude {
    pub use super::clipboard::ClipboardCommand;
    pub use super::config::WordCount;
    pub use super::keyring::{KeyringCommand, KeyringError, KeyringStatus};

    pub mod state_management {
        pub use super::super::config::APPLICATION_CONFIG;
        pub use super::super::helpers::*;
        pub use super::super::keyring::KEYRING_STATUS;
    }
}

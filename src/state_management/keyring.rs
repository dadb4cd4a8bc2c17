use dioxus::prelude::*;

use bip39::{Language, Mnemonic};
use futures_util::stream::StreamExt;
use tokio::sync::oneshot;

use crate::utils::CCStr;

use super::config::WordCount;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyringError {
    #[error("No recovery phrase is stored in the keyring")]
    NoMnemonic,
    #[error("Invalid recovery phrase: {0}")]
    InvalidMnemonic(#[from] bip39::Error),
    #[error("Keyring service is unavailable")]
    ServiceUnavailable,
}

/// How the wallet currently held by the keyring came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyringStatus {
    #[default]
    Empty,
    Created,
    Imported,
}

pub static KEYRING_STATUS: GlobalSignal<KeyringStatus> = Signal::global(|| KeyringStatus::Empty);

pub enum KeyringCommand {
    /// Generate a fresh recovery phrase, replacing any previous one
    Create {
        word_count: WordCount,
        result: oneshot::Sender<Result<(), KeyringError>>,
    },
    /// Validate and store a user-provided recovery phrase
    Import {
        phrase: String,
        result: oneshot::Sender<Result<(), KeyringError>>,
    },
    GetMnemonic {
        result: oneshot::Sender<Result<CCStr, KeyringError>>,
    },
}
// Never print the phrase
impl core::fmt::Debug for KeyringCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create { word_count, .. } => f
                .debug_struct("Create")
                .field("word_count", word_count)
                .finish_non_exhaustive(),
            Self::Import { .. } => f.debug_struct("Import").finish_non_exhaustive(),
            Self::GetMnemonic { .. } => f.debug_struct("GetMnemonic").finish_non_exhaustive(),
        }
    }
}

/// In-memory holder of the wallet recovery phrase.
#[derive(Default)]
pub(super) struct Keyring {
    mnemonic: Option<Mnemonic>,
}
impl Keyring {
    pub fn create(&mut self, word_count: WordCount) -> Result<(), KeyringError> {
        let mnemonic = Mnemonic::generate_in(Language::English, word_count.count())?;
        self.mnemonic = Some(mnemonic);
        Ok(())
    }

    pub fn import(&mut self, phrase: &str) -> Result<(), KeyringError> {
        let normalized = phrase
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &normalized)?;
        self.mnemonic = Some(mnemonic);
        Ok(())
    }

    pub fn mnemonic(&self) -> Result<CCStr, KeyringError> {
        self.mnemonic
            .as_ref()
            .map(|m| CCStr::from(m.to_string()))
            .ok_or(KeyringError::NoMnemonic)
    }
}

/// Keyring service coroutine
pub(super) fn use_keyring_service() -> Coroutine<KeyringCommand> {
    use_coroutine(
        move |mut rx: UnboundedReceiver<KeyringCommand>| async move {
            log::info!("keyring_service (coroutine) - start");

            let mut keyring = Keyring::default();

            while let Some(cmd) = rx.next().await {
                log::debug!("keyring_service (coroutine) - Processing command {cmd:?}...");
                match cmd {
                    KeyringCommand::Create { word_count, result } => {
                        let outcome = keyring.create(word_count);
                        if outcome.is_ok() {
                            *KEYRING_STATUS.write() = KeyringStatus::Created;
                        }
                        let _ = result.send(outcome);
                    }
                    KeyringCommand::Import { phrase, result } => {
                        let outcome = keyring.import(&phrase);
                        if outcome.is_ok() {
                            *KEYRING_STATUS.write() = KeyringStatus::Imported;
                        }
                        let _ = result.send(outcome);
                    }
                    KeyringCommand::GetMnemonic { result } => {
                        let _ = result.send(keyring.mnemonic());
                    }
                }
                log::debug!("keyring_service (coroutine) - Command processed");
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, time::Duration};

    use dioxus_core::VirtualDom;

    use super::super::helpers::{fetch_mnemonic, import_wallet};
    use crate::utils::{CheapClone, EqCheapClone};

    const VALID_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn empty_keyring_has_no_mnemonic() {
        assert_eq!(
            Keyring::default().mnemonic(),
            Err(KeyringError::NoMnemonic)
        );
    }

    #[test]
    fn create_generates_requested_word_count() {
        let mut keyring = Keyring::default();
        keyring.create(WordCount::TwentyFour).unwrap();
        let phrase = keyring.mnemonic().unwrap();
        assert_eq!(phrase.split(' ').count(), 24);

        keyring.create(WordCount::Twelve).unwrap();
        let replaced = keyring.mnemonic().unwrap();
        assert_eq!(replaced.split(' ').count(), 12);
        assert_ne!(phrase, replaced);
    }

    #[test]
    fn import_normalizes_spacing_and_case() {
        let mut keyring = Keyring::default();
        keyring
            .import("  Abandon abandon abandon\nabandon abandon abandon abandon abandon abandon abandon abandon ABOUT ")
            .unwrap();
        assert_eq!(keyring.mnemonic().unwrap().as_ref(), VALID_PHRASE);
    }

    #[test]
    fn import_rejects_bad_checksum_and_keeps_previous() {
        let mut keyring = Keyring::default();
        keyring.import(VALID_PHRASE).unwrap();

        let err = keyring
            .import("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon")
            .unwrap_err();
        assert!(matches!(err, KeyringError::InvalidMnemonic(_)));
        assert_eq!(keyring.mnemonic().unwrap().as_ref(), VALID_PHRASE);
    }

    #[test]
    fn command_debug_hides_phrase() {
        let (result, _rx) = oneshot::channel();
        let cmd = KeyringCommand::Import {
            phrase: VALID_PHRASE.to_owned(),
            result,
        };
        let printed = format!("{cmd:?}");
        assert!(!printed.contains("abandon"));
        assert!(printed.starts_with("Import"));
    }

    #[derive(Default)]
    struct Observed {
        before: Option<Result<CCStr, KeyringError>>,
        bad_import: Option<Result<(), KeyringError>>,
        good_import: Option<Result<(), KeyringError>>,
        after: Option<Result<CCStr, KeyringError>>,
        status: Option<KeyringStatus>,
    }

    #[derive(Props, Clone, PartialEq)]
    struct ServiceHarnessProps {
        observed: EqCheapClone<RefCell<Observed>>,
    }

    #[allow(non_snake_case)]
    fn ServiceHarness(ServiceHarnessProps { observed }: ServiceHarnessProps) -> Element {
        let keyring_service = use_keyring_service();
        use_future(move || {
            let observed = observed.clone();
            async move {
                let before = fetch_mnemonic(keyring_service).await;
                let bad_import = import_wallet(keyring_service, "not a phrase".to_owned()).await;
                let good_import = import_wallet(keyring_service, VALID_PHRASE.to_owned()).await;
                let after = fetch_mnemonic(keyring_service).await;

                let mut observed = observed.borrow_mut();
                observed.before = Some(before);
                observed.bad_import = Some(bad_import);
                observed.good_import = Some(good_import);
                observed.after = Some(after);
                observed.status = Some(*KEYRING_STATUS.peek());
            }
        });
        rsx! {}
    }

    #[tokio::test]
    async fn service_answers_through_helpers() {
        let observed = CheapClone::new(RefCell::new(Observed::default()));
        let mut dom = VirtualDom::new_with_props(
            ServiceHarness,
            ServiceHarnessProps {
                observed: observed.clone().into(),
            },
        );
        dom.rebuild_in_place();
        for _ in 0..4 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        }

        let observed = observed.borrow();
        assert_eq!(observed.before, Some(Err(KeyringError::NoMnemonic)));
        assert!(matches!(
            observed.bad_import,
            Some(Err(KeyringError::InvalidMnemonic(_)))
        ));
        assert_eq!(observed.good_import, Some(Ok(())));
        assert_eq!(observed.after, Some(Ok(CCStr::from(VALID_PHRASE))));
        assert_eq!(observed.status, Some(KeyringStatus::Imported));
    }
}

use crate::prelude::*;

use futures_util::future::LocalBoxFuture;

use crate::{
    components::{
        card_layout::{CardIcon, CardLayout},
        copy::CopyToClipboardButton,
        loading::Loading,
        svg::{
            AlertTriangle, ArrowRight, DrawSvg,
            SvgSize::{Size5, Size6},
        },
    },
    utils::{CCStr, CheapClone, EqCheapClone},
};

use super::{proceed_to_main, Navigate};

/// Onboarding context of the backup page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackupMode {
    #[default]
    Created,
    Imported,
}

/// Source of the wallet recovery phrase.
///
/// The returned future must not borrow the provider, so that the page can
/// drop it (and its result) when it unmounts before the fetch settles.
pub trait MnemonicProvider {
    fn fetch_mnemonic(&self) -> LocalBoxFuture<'static, Result<CCStr, KeyringError>>;
}

impl MnemonicProvider for Coroutine<KeyringCommand> {
    fn fetch_mnemonic(&self) -> LocalBoxFuture<'static, Result<CCStr, KeyringError>> {
        Box::pin(state_management::fetch_mnemonic(*self))
    }
}

/// Shared [MnemonicProvider] usable as a component prop.
///
/// Two handles are equal when they point to the same provider instance.
#[derive(Clone, PartialEq)]
pub struct MnemonicProviderHandle(EqCheapClone<dyn MnemonicProvider>);
impl MnemonicProviderHandle {
    pub fn new(provider: impl MnemonicProvider + 'static) -> Self {
        let provider: CheapClone<dyn MnemonicProvider> = CheapClone::new(provider);
        Self(provider.into())
    }
}
impl core::ops::Deref for MnemonicProviderHandle {
    type Target = dyn MnemonicProvider;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// The only failure the backup page knows about.
///
/// Both a provider error and an empty phrase end up here, and the page shows
/// this message in place of the phrase without any further detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Something is wrong, Recovery Phrase is empty.")]
pub struct MnemonicUnavailable;

pub async fn load_mnemonic(
    provider: &dyn MnemonicProvider,
) -> Result<CCStr, MnemonicUnavailable> {
    let phrase = provider
        .fetch_mnemonic()
        .await
        .map_err(|_| MnemonicUnavailable)?;
    if phrase.trim().is_empty() {
        return Err(MnemonicUnavailable);
    }
    Ok(phrase)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PhraseSection {
    Loading,
    Phrase(CCStr),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackupState {
    pub mode: BackupMode,
    pub loading: bool,
    pub mnemonic: Option<CCStr>,
}
impl BackupState {
    /// Builds the state from the fetch outcome: `None` while pending, then
    /// `Some(None)` when no phrase could be obtained.
    pub fn from_fetch(mode: BackupMode, fetched: Option<Option<CCStr>>) -> Self {
        match mode {
            BackupMode::Created => Self {
                mode,
                loading: fetched.is_none(),
                mnemonic: fetched.flatten(),
            },
            BackupMode::Imported => Self {
                mode,
                loading: false,
                mnemonic: None,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            BackupMode::Created => "Wallet Created Successfully!",
            BackupMode::Imported => "Wallet Imported Successfully!",
        }
    }

    pub fn subtitle(&self) -> Option<&'static str> {
        match self.mode {
            BackupMode::Created => Some("Recovery Phrase"),
            BackupMode::Imported => None,
        }
    }

    /// `None` when the page has no phrase section at all
    pub fn phrase_section(&self) -> Option<PhraseSection> {
        match self.mode {
            BackupMode::Imported => None,
            BackupMode::Created if self.loading => Some(PhraseSection::Loading),
            BackupMode::Created => Some(match &self.mnemonic {
                Some(mnemonic) => PhraseSection::Phrase(mnemonic.clone()),
                None => PhraseSection::Unavailable,
            }),
        }
    }
}

/// Settled fetch, tied to the provider that answered it
#[derive(Clone)]
struct FetchedMnemonic {
    provider: MnemonicProviderHandle,
    mnemonic: Option<CCStr>,
}

/// Confirmation card shown at the end of the wallet creation or import.
///
/// In [BackupMode::Created] it fetches the recovery phrase once from `provider`
/// and displays it with a copy button. The fetch assumes the keyring is usable:
/// a locked keyring simply ends up as [MnemonicUnavailable].
#[component]
pub fn BackupPage(#[props(default)] mode: BackupMode, provider: MnemonicProviderHandle) -> Element {
    log::debug!("BackupPage Rendered");

    let mut fetched = use_signal(|| None::<FetchedMnemonic>);

    // The task belongs to this scope: if the page unmounts first, the fetch is
    // dropped and its result never applied.
    let _fetch = use_resource(use_reactive!(|mode, provider| async move {
        fetched.set(None);
        if mode == BackupMode::Created {
            let mnemonic = load_mnemonic(&*provider).await.ok();
            fetched.set(Some(FetchedMnemonic { provider, mnemonic }));
        }
    }));

    // An outcome from a previous provider is never shown, even before the new
    // run had a chance to reset it
    let current = fetched
        .read()
        .as_ref()
        .filter(|f| f.provider == provider)
        .map(|f| f.mnemonic.clone());
    let state = BackupState::from_fetch(mode, current);

    use_drop(|| log::debug!("BackupPage Dropped"));

    rsx! {
        CardLayout {
            icon: CardIcon::Success,
            title: CCStr::from(state.title()),
            subtitle: state.subtitle().map(CCStr::from),
            if let Some(section) = state.phrase_section() {
                Loading { loading: section == PhraseSection::Loading,
                    PhraseDisplay { section: section.clone() }
                }
                div { class: "text-sm text-base-content/80",
                    "Your recovery phrase makes it easy to back up and restore your account."
                }
                div { class: "text-sm text-base-content/80",
                    div { class: "font-bold text-warning", "WARNING" }
                    "Never disclose your secret recovery phrase. Anyone with the passphrase can take over your account forever."
                }
            }
            div { class: "grow" }
            button {
                r#type: "button",
                class: "btn btn-primary btn-lg w-full",
                onclick: move |_| proceed_to_main(&navigator()),
                "Open Wallet"
                DrawSvg::<ArrowRight> { size: Size6 }
            }
        }
    }
}

#[component]
fn PhraseDisplay(section: PhraseSection) -> Element {
    match section {
        PhraseSection::Phrase(mnemonic) => rsx! {
            div { class: "rounded-box bg-base-200 p-4 font-mono text-sm break-words",
                "{mnemonic}"
                div { class: "flex justify-end mt-2",
                    CopyToClipboardButton { value: mnemonic.clone(), "COPY" }
                }
            }
        },
        PhraseSection::Unavailable => rsx! {
            div { role: "alert", class: "alert alert-warning",
                DrawSvg::<AlertTriangle> { size: Size5 }
                span { {MnemonicUnavailable.to_string()} }
            }
        },
        PhraseSection::Loading => rsx! {},
    }
}

fn use_keyring_mnemonic_provider() -> MnemonicProviderHandle {
    let keyring_service = state_management::use_keyring_service();
    use_hook(|| MnemonicProviderHandle::new(keyring_service))
}

#[component]
pub fn BackupView() -> Element {
    log::debug!("BackupView Rendered");
    let provider = use_keyring_mnemonic_provider();
    rsx! {
        BackupPage { provider }
    }
}

#[component]
pub fn BackupImportedView() -> Element {
    log::debug!("BackupImportedView Rendered");
    let provider = use_keyring_mnemonic_provider();
    rsx! {
        BackupPage { mode: BackupMode::Imported, provider }
    }
}

use super::*;

pub async fn create_wallet(
    keyring_service: Coroutine<KeyringCommand>,
    word_count: WordCount,
) -> Result<(), KeyringError> {
    log::debug!("create_wallet - start");
    let (result, rx) = oneshot::channel();
    keyring_service.send(KeyringCommand::Create { word_count, result });
    let outcome = rx.await.map_err(|_| KeyringError::ServiceUnavailable)?;
    log::debug!("create_wallet - finished");
    outcome
}

pub async fn import_wallet(
    keyring_service: Coroutine<KeyringCommand>,
    phrase: String,
) -> Result<(), KeyringError> {
    log::debug!("import_wallet - start");
    let (result, rx) = oneshot::channel();
    keyring_service.send(KeyringCommand::Import { phrase, result });
    let outcome = rx.await.map_err(|_| KeyringError::ServiceUnavailable)?;
    log::debug!("import_wallet - finished");
    outcome
}

pub async fn fetch_mnemonic(
    keyring_service: Coroutine<KeyringCommand>,
) -> Result<CCStr, KeyringError> {
    log::debug!("fetch_mnemonic - start");
    let (result, rx) = oneshot::channel();
    keyring_service.send(KeyringCommand::GetMnemonic { result });
    let mnemonic = rx.await.map_err(|_| KeyringError::ServiceUnavailable)?;
    log::debug!("fetch_mnemonic - loaded");
    mnemonic
}

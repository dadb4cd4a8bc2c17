use super::*;

/// Asks the clipboard service to copy `text` as-is, without trimming or reflowing it
pub fn copy_to_clipboard(clipboard_service: Coroutine<ClipboardCommand>, text: &str) {
    // The text is usually a recovery phrase, only its size is traced
    log::debug!("copy_to_clipboard - {} chars", text.chars().count());
    clipboard_service.send(ClipboardCommand::Set(text.to_owned()));
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, time::Duration};

    use dioxus_core::VirtualDom;
    use futures_util::stream::StreamExt;

    use crate::utils::{CheapClone, EqCheapClone};

    type Received = EqCheapClone<RefCell<Vec<ClipboardCommand>>>;

    #[derive(Props, Clone, PartialEq)]
    struct RecorderProps {
        received: Received,
        text: &'static str,
    }

    /// Stands in for the clipboard service and keeps every command it gets
    #[allow(non_snake_case)]
    fn Recorder(RecorderProps { received, text }: RecorderProps) -> Element {
        use_coroutine(move |mut rx: UnboundedReceiver<ClipboardCommand>| {
            let received = received.clone();
            async move {
                while let Some(cmd) = rx.next().await {
                    received.borrow_mut().push(cmd);
                }
            }
        });
        rsx! {
            CopyOnMount { text }
        }
    }

    #[component]
    fn CopyOnMount(text: &'static str) -> Element {
        let clipboard_service = use_clipboard_service();
        use_hook(|| copy_to_clipboard(clipboard_service, text));
        rsx! {}
    }

    #[tokio::test]
    async fn sends_the_exact_text() {
        let received: Received = CheapClone::new(RefCell::new(Vec::new())).into();
        let mut dom = VirtualDom::new_with_props(
            Recorder,
            RecorderProps {
                received: received.clone(),
                text: "alpha beta gamma",
            },
        );
        dom.rebuild_in_place();
        for _ in 0..4 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        }

        assert_eq!(
            *received.borrow(),
            vec![ClipboardCommand::Set("alpha beta gamma".to_owned())]
        );
    }
}

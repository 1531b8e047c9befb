use futures::future::LocalBoxFuture;
use leptos::prelude::*;
use std::future::Future;
use std::rc::Rc;

use crate::shared::icons::icon;

/// Visual kind of the modal: confirmation (warning icon, cancel button) or
/// success feedback.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Confirm,
    Success,
}

/// The primary-action callback. Always asynchronous; mutation flows await
/// their network call inside it.
pub type PrimaryAction = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<(), String>>>;

/// Wraps an async closure into a [`PrimaryAction`].
pub fn async_action<F, Fut>(f: F) -> PrimaryAction
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    Rc::new(move || Box::pin(f()))
}

/// A [`PrimaryAction`] with no async work, e.g. an "OK" that only closes.
pub fn sync_action<F>(f: F) -> PrimaryAction
where
    F: Fn() + Clone + 'static,
{
    Rc::new(move || {
        let f = f.clone();
        Box::pin(async move {
            f();
            Ok(())
        })
    })
}

/// Content descriptor driving the single reusable modal.
#[derive(Clone)]
pub struct ModalContent {
    pub kind: ModalKind,
    pub title: String,
    pub body: String,
    pub primary_text: String,
    pub on_primary: PrimaryAction,
}

impl ModalContent {
    pub fn confirm(
        title: impl Into<String>,
        body: impl Into<String>,
        primary_text: impl Into<String>,
        on_primary: PrimaryAction,
    ) -> Self {
        Self {
            kind: ModalKind::Confirm,
            title: title.into(),
            body: body.into(),
            primary_text: primary_text.into(),
            on_primary,
        }
    }

    pub fn success(
        title: impl Into<String>,
        body: impl Into<String>,
        primary_text: impl Into<String>,
        on_primary: PrimaryAction,
    ) -> Self {
        Self {
            kind: ModalKind::Success,
            title: title.into(),
            body: body.into(),
            primary_text: primary_text.into(),
            on_primary,
        }
    }
}

/// Centralized modal management, provided via context. The content holds an
/// `Rc` action, so the signal lives in local (same-thread) storage.
#[derive(Clone, Copy)]
pub struct ModalService {
    content: RwSignal<Option<ModalContent>, LocalStorage>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new_local(None),
        }
    }

    pub fn open(&self, content: ModalContent) {
        self.content.set(Some(content));
    }

    pub fn close(&self) {
        self.content.set(None);
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// The single modal overlay. The primary button is disabled while the
/// action runs; action failures are logged and swallowed here (the caller
/// opens a follow-up error modal), and the modal never closes itself — the
/// caller closes it inside the action on success.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let busy = RwSignal::new(false);

    view! {
        {move || {
            let Some(content) = modal.content.get() else {
                return ().into_any();
            };
            let run = content.on_primary.clone();
            let is_confirm = content.kind == ModalKind::Confirm;
            let primary_text = content.primary_text.clone();
            let modal_icon = match content.kind {
                ModalKind::Confirm => view! {
                    <div style="width: 40px; height: 40px; border-radius: 50%; background: #FDECEA; color: #D9534F; display: flex; align-items: center; justify-content: center; flex-shrink: 0;">
                        {icon("warning")}
                    </div>
                }.into_any(),
                ModalKind::Success => view! {
                    <div style="width: 40px; height: 40px; border-radius: 50%; background: #E8F8F0; color: #27AE60; display: flex; align-items: center; justify-content: center; flex-shrink: 0;">
                        {icon("check-circle")}
                    </div>
                }.into_any(),
            };
            let on_primary_click = move |_| {
                if busy.get_untracked() {
                    return;
                }
                busy.set(true);
                let run = run.clone();
                leptos::task::spawn_local(async move {
                    if let Err(err) = run().await {
                        log::error!("modal primary action failed: {err}");
                    }
                    busy.set(false);
                });
            };
            view! {
                <div style="position: fixed; inset: 0; background: rgba(100, 100, 100, 0.75); display: flex; align-items: center; justify-content: center; z-index: 100;">
                    <div style="background: white; border-radius: 8px; box-shadow: 0 10px 25px rgba(0,0,0,0.2); max-width: 480px; width: 100%; overflow: hidden;">
                        <div style="padding: 24px; display: flex; gap: 16px; align-items: flex-start;">
                            {modal_icon}
                            <div>
                                <h3 style="margin: 0; font-size: 16px; font-weight: 600; color: #34495E;">{content.title.clone()}</h3>
                                <p style="margin: 8px 0 0; font-size: 14px; color: #7F8C8D; white-space: pre-line;">{content.body.clone()}</p>
                            </div>
                        </div>
                        <div style="background: #F9FAFB; padding: 12px 24px; display: flex; flex-direction: row-reverse; gap: 12px;">
                            <button
                                style=move || format!(
                                    "padding: 8px 16px; border: none; border-radius: 6px; color: white; font-weight: 600; cursor: pointer; background: {};",
                                    if busy.get() { "#9CA3AF" } else { "#D9534F" }
                                )
                                disabled=move || busy.get()
                                on:click=on_primary_click
                            >
                                {move || if busy.get() { "Enviando...".to_string() } else { primary_text.clone() }}
                            </button>
                            {is_confirm.then(|| view! {
                                <button
                                    style="padding: 8px 16px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; color: #111827; font-weight: 600; cursor: pointer;"
                                    disabled=move || busy.get()
                                    on:click=move |_| modal.close()
                                >
                                    "Cancelar"
                                </button>
                            })}
                        </div>
                    </div>
                </div>
            }.into_any()
        }}
    }
}

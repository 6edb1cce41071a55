use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    title: String,
    body: String,
}

/// Transient notification service. Provided once at the app root;
/// `ToastHost` renders the queue and each toast auto-dismisses.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), body.into());
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), body.into());
    }

    pub fn info(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(ToastKind::Info, title.into(), body.into());
    }

    fn push(&self, kind: ToastKind, title: String, body: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push(ToastEntry {
                id,
                kind,
                title,
                body,
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| {
            t.retain(|e| e.id != id);
        });
    }
}

/// Renders the toast queue. Must be mounted exactly once, at the root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-container">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div
                            class=entry.kind.class()
                            on:click=move |_| svc.dismiss(id)
                        >
                            <div class="toast__title">{entry.title.clone()}</div>
                            <div class="toast__body">{entry.body.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

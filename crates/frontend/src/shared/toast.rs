//! Сервис всплывающих уведомлений.
//!
//! Раздаётся через context всему приложению; отправка fire-and-forget,
//! уведомление исчезает само по истечении срока жизни.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Время жизни уведомления на экране, мс.
const TOAST_TTL_MS: u32 = 5_000;

/// Важность уведомления.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
}

impl ToastIntent {
    fn class(self) -> &'static str {
        match self {
            ToastIntent::Success => "toast toast--success",
            ToastIntent::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub intent: ToastIntent,
}

/// Сервис для централизованного показа уведомлений
#[derive(Clone, Copy)]
pub struct ToastService {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Показать уведомление об успехе
    pub fn success(&self, title: &str, message: String) {
        self.push(ToastIntent::Success, title, message);
    }

    /// Показать уведомление об ошибке
    pub fn error(&self, title: &str, message: String) {
        self.push(ToastIntent::Error, title, message);
    }

    fn push(&self, intent: ToastIntent, title: &str, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(Toast {
                id,
                title: title.to_string(),
                message,
                intent,
            });
        });

        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            service.dismiss(id);
        });
    }

    /// Убрать уведомление с экрана
    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

/// Контейнер уведомлений; монтируется один раз в корне приложения.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.intent.class()>
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__message">{toast.message}</div>
                            </div>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

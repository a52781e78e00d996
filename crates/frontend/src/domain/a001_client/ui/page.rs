use contracts::domain::a001_client::aggregate::{Client, ClientId, NewClient};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::forms::add::AddClientForm;
use super::forms::edit::EditClientForm;
use super::list::ClientList;
use super::sidebar::ClientsSidebar;
use super::state::{ClientsPageState, ClientsTab, PAGE_SIZE};
use super::stats::ClientStatistics;
use crate::domain::a001_client::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DASHBOARD, PAGE_CAT_DETAIL, PAGE_CAT_LIST};
use crate::shared::toast::ToastService;

/// Страница управления клиентами.
///
/// Контроллер страницы: владеет [`ClientsPageState`], вызывает табличный
/// API и примиряет локальный кэш с результатом. Ошибки удалённых операций
/// не распространяются дальше: они логируются, показываются уведомлением,
/// состояние остаётся прежним.
#[component]
pub fn ClientsPage() -> impl IntoView {
    let toast = use_context::<ToastService>().expect("ToastService not found in context");
    let state = RwSignal::new(ClientsPageState::new());

    let load_clients = move |page: usize| {
        let seq = state.write().begin_fetch();
        spawn_local(async move {
            match api::fetch_clients_page(page, PAGE_SIZE).await {
                Ok((rows, total)) => {
                    let applied = state
                        .try_update(|s| s.apply_page_loaded(seq, page, rows, total))
                        .unwrap_or(false);
                    if !applied {
                        log::debug!("clients: discarded stale page response (seq {})", seq);
                    }
                }
                Err(e) => {
                    log::error!("clients: load failed: {}", e);
                    let current = state
                        .try_update(|s| s.finish_fetch_failed(seq))
                        .unwrap_or(false);
                    if current {
                        toast.error(
                            "Ошибка",
                            "Не удалось загрузить клиентов. Повторите попытку.".to_string(),
                        );
                    }
                }
            }
        });
    };

    let handle_add_client = move |dto: NewClient| {
        spawn_local(async move {
            match api::create_client(&dto).await {
                Ok(created) => {
                    let name = created.fields.name.clone();
                    state.update(|s| s.apply_added(created));
                    toast.success("Успешно", format!("Клиент {} добавлен.", name));
                }
                Err(e) => {
                    log::error!("clients: create failed: {}", e);
                    toast.error(
                        "Ошибка",
                        "Не удалось добавить клиента. Повторите попытку.".to_string(),
                    );
                }
            }
        });
    };

    let handle_update_client = move |updated: Client| {
        spawn_local(async move {
            match api::update_client(&updated).await {
                Ok(()) => {
                    let name = updated.fields.name.clone();
                    state.update(|s| s.apply_updated(updated));
                    toast.success("Успешно", format!("Клиент {} обновлён.", name));
                }
                Err(e) => {
                    log::error!("clients: update failed: {}", e);
                    toast.error(
                        "Ошибка",
                        "Не удалось обновить клиента. Повторите попытку.".to_string(),
                    );
                }
            }
        });
    };

    let handle_delete_client = move |id: ClientId| {
        spawn_local(async move {
            match api::delete_client(&id).await {
                Ok(()) => {
                    state.update(|s| s.apply_deleted(&id));
                    toast.success("Успешно", "Клиент удалён.".to_string());
                }
                Err(e) => {
                    log::error!("clients: delete failed: {}", e);
                    toast.error(
                        "Ошибка",
                        "Не удалось удалить клиента. Повторите попытку.".to_string(),
                    );
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_clients(0);
        }
    });

    let active_tab = Signal::derive(move || state.with(|s| s.active_tab));
    let is_loaded = Signal::derive(move || state.with(|s| s.is_loaded));
    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    let current_page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages));
    let total_count = Signal::derive(move || state.with(|s| s.total_count));
    let editing = Signal::derive(move || state.with(|s| s.editing.clone()));
    let has_editing = Signal::derive(move || state.with(|s| s.editing.is_some()));

    view! {
        <div class="clients-layout">
            <ClientsSidebar
                active_tab=active_tab
                has_editing=has_editing
                on_tab_change=Callback::new(move |tab| state.update(|s| s.set_tab(tab)))
            />

            <div class="clients-layout__content">
                <Show
                    when=move || is_loaded.get()
                    fallback=|| view! { <div class="page page--loading">"Загрузка..."</div> }
                >
                    {move || match active_tab.get() {
                        ClientsTab::List => view! {
                            <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
                                <div class="page__header">
                                    <div class="page__header-left">
                                        <h1 class="page__title">"Клиенты"</h1>
                                        <Badge>
                                            {move || total_count.get().to_string()}
                                        </Badge>
                                    </div>
                                    <div class="page__header-right">
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| state.update(|s| s.set_tab(ClientsTab::Add))
                                        >
                                            {icon("plus")}
                                            " Новый"
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| load_clients(state.with_untracked(|s| s.page))
                                        >
                                            {icon("refresh")}
                                            " Обновить"
                                        </Button>
                                    </div>
                                </div>
                                <div class="page__content">
                                    <ClientList
                                        items=items
                                        current_page=current_page
                                        total_pages=total_pages
                                        total_count=total_count
                                        on_edit=Callback::new(move |client| state.update(|s| s.start_edit(client)))
                                        on_delete=Callback::new(handle_delete_client)
                                        on_page_change=Callback::new(load_clients)
                                    />
                                </div>
                            </PageFrame>
                        }.into_any(),

                        ClientsTab::Add => view! {
                            <PageFrame page_id="a001_client--detail" category=PAGE_CAT_DETAIL>
                                <AddClientForm
                                    on_add=Callback::new(handle_add_client)
                                    on_cancel=Callback::new(move |_| state.update(|s| s.set_tab(ClientsTab::List)))
                                />
                            </PageFrame>
                        }.into_any(),

                        ClientsTab::Edit => match editing.get() {
                            Some(client) => view! {
                                <PageFrame page_id="a001_client--detail" category=PAGE_CAT_DETAIL>
                                    <EditClientForm
                                        client=client
                                        on_save=Callback::new(handle_update_client)
                                        on_cancel=Callback::new(move |_| state.update(|s| s.cancel_edit()))
                                    />
                                </PageFrame>
                            }.into_any(),
                            // вкладка редактирования без выбранного клиента не рисуется
                            None => view! { <></> }.into_any(),
                        },

                        ClientsTab::Stats => view! {
                            <PageFrame page_id="a001_client--dashboard" category=PAGE_CAT_DASHBOARD>
                                <ClientStatistics items=items />
                            </PageFrame>
                        }.into_any(),
                    }}
                </Show>
            </div>
        </div>
    }
}

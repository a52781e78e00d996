use leptos::prelude::*;

use super::state::ClientsTab;
use crate::shared::icons::icon;

/// Навигатор вкладок страницы клиентов.
///
/// Вкладка редактирования доступна только когда контроллер держит
/// выбранного клиента.
#[component]
pub fn ClientsSidebar(
    #[prop(into)] active_tab: Signal<ClientsTab>,
    #[prop(into)] has_editing: Signal<bool>,
    on_tab_change: Callback<ClientsTab>,
) -> impl IntoView {
    let item = move |tab: ClientsTab, icon_name: &'static str, label: &'static str| {
        view! {
            <button
                class="sidebar__item"
                class:sidebar__item--active=move || active_tab.get() == tab
                data-tab=tab.key()
                on:click=move |_| on_tab_change.run(tab)
            >
                {icon(icon_name)}
                <span>{label}</span>
            </button>
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__title">
                {icon("clients")}
                <span>"Управление клиентами"</span>
            </div>
            {item(ClientsTab::List, "list", "Список")}
            {item(ClientsTab::Add, "plus", "Добавить")}
            <button
                class="sidebar__item"
                class:sidebar__item--active=move || active_tab.get() == ClientsTab::Edit
                data-tab=ClientsTab::Edit.key()
                disabled=move || !has_editing.get()
                on:click=move |_| {
                    if has_editing.get() {
                        on_tab_change.run(ClientsTab::Edit);
                    }
                }
            >
                {icon("edit")}
                <span>"Редактирование"</span>
            </button>
            {item(ClientsTab::Stats, "chart", "Статистика")}
        </nav>
    }
}

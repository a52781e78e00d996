use contracts::domain::a001_client::aggregate::{Client, ClientId};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;

/// Таблица текущей страницы клиентов с действиями по строкам.
#[component]
pub fn ClientList(
    #[prop(into)] items: Signal<Vec<Client>>,
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    on_edit: Callback<Client>,
    on_delete: Callback<ClientId>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let confirm_delete = move |client: &Client| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Удалить клиента {}?", client.fields.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            on_delete.run(client.id);
        }
    };

    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Код"</th>
                        <th class="table__header-cell">"Имя"</th>
                        <th class="table__header-cell">"Телефон"</th>
                        <th class="table__header-cell">"Адрес"</th>
                        <th class="table__header-cell">"Город"</th>
                        <th class="table__header-cell table__header-cell--actions"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|c| c.id
                        children=move |client| {
                            let client_for_edit = client.clone();
                            let client_for_delete = client.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{client.fields.custom_id.clone()}</td>
                                    <td class="table__cell">{client.fields.name.clone()}</td>
                                    <td class="table__cell">{client.fields.phone.clone()}</td>
                                    <td class="table__cell">{client.fields.address.clone()}</td>
                                    <td class="table__cell">{client.fields.city.clone()}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| on_edit.run(client_for_edit.clone())
                                            attr:title="Редактировать"
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| confirm_delete(&client_for_delete)
                                            attr:title="Удалить"
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                if items.get().is_empty() {
                    view! { <div class="table__empty">"Нет клиентов на этой странице"</div> }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                on_page_change=on_page_change
            />
        </div>
    }
}

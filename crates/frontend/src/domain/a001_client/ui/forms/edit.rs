use contracts::domain::a001_client::aggregate::{Client, NewClient};
use leptos::prelude::*;
use thaw::*;

/// Форма редактирования клиента.
///
/// Буфер заполняется из переданной записи; наружу уходит запись целиком
/// с прежним id. Проверка одновременных правок не выполняется — побеждает
/// последняя запись.
#[component]
pub fn EditClientForm(
    client: Client,
    on_save: Callback<Client>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = client.id;
    let title = format!("Редактирование: {}", client.fields.name);

    let custom_id = RwSignal::new(client.fields.custom_id.clone());
    let name = RwSignal::new(client.fields.name.clone());
    let phone = RwSignal::new(client.fields.phone.clone());
    let address = RwSignal::new(client.fields.address.clone());
    let city = RwSignal::new(client.fields.city.clone());
    let (error, set_error) = signal::<Option<String>>(None);

    let collect = move || NewClient {
        custom_id: custom_id.get(),
        name: name.get(),
        phone: phone.get(),
        address: address.get(),
        city: city.get(),
    };

    let on_submit = move |_| {
        let fields = collect();
        if let Err(msg) = fields.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        on_save.run(Client { id, fields });
    };

    view! {
        <div class="details-container client-form">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form__group">
                    <Label>"Код"</Label>
                    <Input value=custom_id />
                </div>
                <div class="form__group">
                    <Label>"Имя"</Label>
                    <Input value=name />
                </div>
                <div class="form__group">
                    <Label>"Телефон"</Label>
                    <Input value=phone />
                </div>
                <div class="form__group">
                    <Label>"Адрес"</Label>
                    <Input value=address />
                </div>
                <div class="form__group">
                    <Label>"Город"</Label>
                    <Input value=city />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Отмена"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                    "Сохранить"
                </Button>
            </div>
        </div>
    }
}

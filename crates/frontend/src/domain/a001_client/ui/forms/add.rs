use contracts::domain::a001_client::aggregate::NewClient;
use leptos::prelude::*;
use thaw::*;

/// Форма создания клиента.
///
/// Держит локальный буфер полей; наружу отдаёт проверенный DTO, сетевыми
/// вызовами занимается контроллер страницы.
#[component]
pub fn AddClientForm(on_add: Callback<NewClient>, on_cancel: Callback<()>) -> impl IntoView {
    let custom_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let collect = move || NewClient {
        custom_id: custom_id.get(),
        name: name.get(),
        phone: phone.get(),
        address: address.get(),
        city: city.get(),
    };

    let on_submit = move |_| {
        let dto = collect();
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        on_add.run(dto);
    };

    view! {
        <div class="details-container client-form">
            <div class="details-header">
                <h3>"Новый клиент"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form__group">
                    <Label>"Код"</Label>
                    <Input value=custom_id placeholder="C1" />
                </div>
                <div class="form__group">
                    <Label>"Имя"</Label>
                    <Input value=name placeholder="Введите имя клиента" />
                </div>
                <div class="form__group">
                    <Label>"Телефон"</Label>
                    <Input value=phone placeholder="0102030405" />
                </div>
                <div class="form__group">
                    <Label>"Адрес"</Label>
                    <Input value=address placeholder="Улица, дом" />
                </div>
                <div class="form__group">
                    <Label>"Город"</Label>
                    <Input value=city placeholder="Город" />
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
                    "Добавить"
                </Button>
            </div>
        </div>
    }
}

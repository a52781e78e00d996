use crate::domain::a001_client::ui::ClientsPage;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the notification sink to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <Router>
                <ToastHost />
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/dashboard/clients" /> } />
                    <Route path=path!("/dashboard/clients") view=ClientsPage />
                </Routes>
            </Router>
        </ConfigProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Страница не найдена"</h1>
        </div>
    }
}

use leptos::{
    ev::SubmitEvent,
    logging,
    prelude::*,
};
use leptos_meta::*;
use leptos_router::{
    components::{
        Redirect,
        Route,
        Router,
        Routes,
        A,
    },
    hooks::use_navigate,
    StaticSegment,
};
use pubclient::ApiClient;
use pubctrl::route::{
    self,
    NAV_ITEMS,
};
use std::sync::Arc;

use crate::{
    conf,
    error::AppError,
    error_template::ErrorTemplate,
    notify::{
        Notifier,
        Toasts,
    },
    page::{
        AuthorPage,
        BookPage,
        MagazinePage,
        PublicationPage,
    },
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notifier = Notifier::default();
    provide_context(notifier.clone());
    let client = match ApiClient::new(conf::api_base_url()) {
        Ok(client) => client.with_reporter(Arc::new(notifier)),
        Err(e) => {
            logging::error!("{e}");
            return view! {
                <ErrorTemplate error=AppError::ClientUnavailable(e.to_string())/>
            }.into_any();
        }
    };
    logging::log!("using api at {}", client.base_url());
    provide_context(client);

    view! {
        <Title text="Publisher Console"/>
        <Router>
            <Navbar/>
            <Toasts/>
            <main>
                <Routes fallback=|| view! { <ErrorTemplate error=AppError::NotFound/> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path=route::Route::default().path()/> }
                    />
                    <Route path=StaticSegment("books") view=BookPage/>
                    <Route path=StaticSegment("magazines") view=MagazinePage/>
                    <Route path=StaticSegment("authors") view=AuthorPage/>
                    <Route path=StaticSegment("publications") view=PublicationPage/>
                </Routes>
            </main>
        </Router>
    }.into_any()
}

#[component]
fn Navbar() -> impl IntoView {
    let navigate = use_navigate();
    let (title, set_title) = signal(String::new());
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // blank searches stay put
        if let Some(target) = route::search(&title.get_untracked()) {
            navigate(&target.href(), Default::default());
        }
    };

    view! {
        <nav id="navbar">
            {NAV_ITEMS.iter()
                .map(|item| view! { <A href=item.path()>{item.label()}</A> })
                .collect_view()}
            <form role="search" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Search publications"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
        </nav>
    }
}

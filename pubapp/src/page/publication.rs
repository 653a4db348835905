use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;
use pubclient::{
    ApiClient,
    PublicationService,
};
use pubctrl::{
    route::Route,
    view::CrudView,
};

use crate::{
    component::{
        FormDialog,
        TextField,
    },
    crud,
};

#[component]
pub fn PublicationPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let state = crud::use_crud_view(CrudView::new(PublicationService::new(client)));
    let location = use_location();

    // the navbar search lands here; follow the title in the location
    Effect::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        let title = match Route::parse(&path, Some(search.as_str())) {
            Ok(Route::Publications { title }) => title,
            Ok(_) => None,
            Err(e) => {
                log::warn!("{e}");
                None
            }
        };
        crud::refresh(state, |view| view.select_title(title));
    });

    let filter = move || state.with(|view| view.base_query().title.clone())
        .map(|title| view! {
            <p class="filter">
                "Showing titles matching \"" {title} "\" "
                <a href=Route::Publications { title: None }.href()>"(show all)"</a>
            </p>
        });

    let rows = move || state.with(|view| view.items.clone())
        .into_iter()
        .map(|publication| {
            let edit = publication.clone();
            let remove = publication.clone();
            view! {
                <tr>
                    <td>{publication.id}</td>
                    <td>{publication.title}</td>
                    <td>{publication.publication_date}</td>
                    <td>
                        <button on:click=move |_| state.update(|view| view.open_edit(edit.clone()))>
                            "Edit"
                        </button>
                        <button on:click=move |_| state.update(|view| view.confirm_delete(remove.clone()))>
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <Title text="Publications | Publisher Console"/>
        {crud::toolbar(state, "Publications")}
        {filter}
        <table class="listing">
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Title"</th>
                    <th>"Published"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <FormDialog
            header=crud::dialog_header(state, "publication")
            visible=move || state.with(|view| view.display_dialog)
            missing=move || state.with(|view| view.missing_fields())
            on_save=move |_| crud::save(state)
            on_cancel=move |_| state.update(|view| view.hide_dialog())
        >
            <TextField
                label="Title"
                value=move || state.with(|view| view.form.title.clone())
                on_input=move |value| state.update(|view| view.form.title = value)
            />
            <TextField
                label="Publication date"
                input_type="date"
                value=move || state.with(|view| view.form.publication_date.clone())
                on_input=move |value| state.update(|view| view.form.publication_date = value)
            />
        </FormDialog>
        {crud::delete_confirm(state)}
    }
}

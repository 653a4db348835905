use leptos::prelude::*;
use leptos_meta::Title;
use pubclient::{
    ApiClient,
    AuthorService,
};
use pubctrl::view::CrudView;

use crate::{
    component::{
        FormDialog,
        TextField,
    },
    crud,
};

#[component]
pub fn AuthorPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let state = crud::use_crud_view(CrudView::new(AuthorService::new(client)));
    crud::reload(state);

    let rows = move || state.with(|view| view.items.clone())
        .into_iter()
        .map(|author| {
            let edit = author.clone();
            let remove = author.clone();
            view! {
                <tr>
                    <td>{author.id}</td>
                    <td>{author.name}</td>
                    <td>{author.birth_date}</td>
                    <td>{author.nationality}</td>
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
        <Title text="Authors | Publisher Console"/>
        {crud::toolbar(state, "Authors")}
        <table class="listing">
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Name"</th>
                    <th>"Birth date"</th>
                    <th>"Nationality"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <FormDialog
            header=crud::dialog_header(state, "author")
            visible=move || state.with(|view| view.display_dialog)
            missing=move || state.with(|view| view.missing_fields())
            on_save=move |_| crud::save(state)
            on_cancel=move |_| state.update(|view| view.hide_dialog())
        >
            <TextField
                label="Name"
                value=move || state.with(|view| view.form.name.clone())
                on_input=move |value| state.update(|view| view.form.name = value)
            />
            <TextField
                label="Birth date"
                input_type="date"
                value=move || state.with(|view| view.form.birth_date.clone())
                on_input=move |value| state.update(|view| view.form.birth_date = value)
            />
            <TextField
                label="Nationality"
                value=move || state.with(|view| view.form.nationality.clone())
                on_input=move |value| state.update(|view| view.form.nationality = value)
            />
        </FormDialog>
        {crud::delete_confirm(state)}
    }
}

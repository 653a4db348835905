use leptos::prelude::*;
use leptos_meta::Title;
use pubclient::{
    ApiClient,
    BookService,
};
use pubcore::input::NumberInput;
use pubctrl::view::CrudView;

use crate::{
    component::{
        FormDialog,
        TextField,
    },
    crud,
};

#[component]
pub fn BookPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let state = crud::use_crud_view(CrudView::new(BookService::new(client)));
    crud::reload(state);

    let rows = move || state.with(|view| view.items.clone())
        .into_iter()
        .map(|book| {
            let edit = book.clone();
            let remove = book.clone();
            let author = book.author.map(|author| author.name);
            view! {
                <tr>
                    <td>{book.id}</td>
                    <td>{book.title}</td>
                    <td>{book.publication_date}</td>
                    <td>{book.isbn}</td>
                    <td>{author}</td>
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
        <Title text="Books | Publisher Console"/>
        {crud::toolbar(state, "Books")}
        <table class="listing">
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Title"</th>
                    <th>"Published"</th>
                    <th>"ISBN"</th>
                    <th>"Author"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <FormDialog
            header=crud::dialog_header(state, "book")
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
            <TextField
                label="ISBN"
                value=move || state.with(|view| view.form.isbn.clone())
                on_input=move |value| state.update(|view| view.form.isbn = value)
            />
            <TextField
                label="Author id"
                value=move || state.with(|view| view.form.author_id.to_string())
                on_input=move |value: String| state.update(|view| {
                    view.form.author_id = NumberInput::Text(value)
                })
            />
        </FormDialog>
        {crud::delete_confirm(state)}
    }
}

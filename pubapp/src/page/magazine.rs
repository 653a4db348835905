use leptos::{
    ev::{
        Event,
        MouseEvent,
    },
    prelude::*,
};
use leptos_meta::Title;
use pubclient::{
    ApiClient,
    MagazineService,
};
use pubcore::{
    input::NumberInput,
    listing::SortDirection,
    magazine::AuthorIds,
};
use pubctrl::view::{
    CrudView,
    Paging,
};

use crate::{
    component::{
        FormDialog,
        TextField,
    },
    crud::{
        self,
        ViewState,
    },
};

const PAGE_SIZES: [u32; 3] = [5, 10, 20];

#[component]
pub fn MagazinePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let state = crud::use_crud_view(
        CrudView::paged(MagazineService::new(client), Paging::default())
    );
    crud::reload(state);

    let rows = move || state.with(|view| view.items.clone())
        .into_iter()
        .map(|magazine| {
            let edit = magazine.clone();
            let remove = magazine.clone();
            let authors = magazine.authors.iter()
                .map(|author| author.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            view! {
                <tr>
                    <td>{magazine.id}</td>
                    <td>{magazine.title}</td>
                    <td>{magazine.publication_date}</td>
                    <td>{magazine.issue_number}</td>
                    <td>{authors}</td>
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
        <Title text="Magazines | Publisher Console"/>
        {crud::toolbar(state, "Magazines")}
        <table class="listing">
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Title"</th>
                    <th>
                        "Published "
                        {sort_toggle(state)}
                    </th>
                    <th>"Issue"</th>
                    <th>"Authors"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        {paginator(state)}
        <FormDialog
            header=crud::dialog_header(state, "magazine")
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
                label="Issue number"
                value=move || state.with(|view| view.form.issue_number.to_string())
                on_input=move |value: String| state.update(|view| {
                    view.form.issue_number = NumberInput::Text(value)
                })
            />
            <TextField
                label="Author ids (comma separated)"
                value=move || state.with(|view| view.form.author_ids.to_string())
                on_input=move |value| state.update(|view| view.form.author_ids = AuthorIds::Text(value))
            />
        </FormDialog>
        {crud::delete_confirm(state)}
    }
}

fn paging(state: ViewState<MagazineService>) -> Paging {
    state.with(|view| view.paging.unwrap_or_default())
}

fn change_page(state: ViewState<MagazineService>, page: u32, page_size: u32) {
    crud::refresh(state, |view| view.select_page(page, page_size));
}

fn sort_toggle(state: ViewState<MagazineService>) -> impl IntoView {
    let toggle = move |_: MouseEvent| {
        let sort = match paging(state).sort {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
        crud::refresh(state, |view| view.select_sort(sort));
    };
    view! {
        <button class="sort" on:click=toggle>
            {move || match paging(state).sort {
                SortDirection::Asc => "\u{25b2}",
                SortDirection::Desc => "\u{25bc}",
            }}
        </button>
    }
}

fn paginator(state: ViewState<MagazineService>) -> impl IntoView {
    let page_count = move || {
        let paging = paging(state);
        paging.total_records.div_ceil(paging.page_size.max(1) as u64).max(1)
    };
    let previous = move |_: MouseEvent| {
        let paging = paging(state);
        if paging.page > 0 {
            change_page(state, paging.page - 1, paging.page_size);
        }
    };
    let next = move |_: MouseEvent| {
        let paging = paging(state);
        if ((paging.page + 1) as u64) < page_count() {
            change_page(state, paging.page + 1, paging.page_size);
        }
    };
    let resize = move |ev: Event| {
        let page_size = event_target_value(&ev).parse().unwrap_or(Paging::default().page_size);
        change_page(state, 0, page_size);
    };
    view! {
        <div class="paging">
            <button on:click=previous disabled=move || paging(state).page == 0>"Previous"</button>
            <span>
                {move || format!(
                    "Page {} of {} ({} records)",
                    paging(state).page + 1,
                    page_count(),
                    paging(state).total_records,
                )}
            </span>
            <button
                on:click=next
                disabled=move || ((paging(state).page + 1) as u64) >= page_count()
            >"Next"</button>
            <select on:change=resize prop:value=move || paging(state).page_size.to_string()>
                {PAGE_SIZES.into_iter()
                    .map(|size| view! { <option value=size.to_string()>{size}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

//! Glue between `CrudView` and the reactive graph.
//!
//! The view lives in a signal and cannot be borrowed across an await, so
//! every operation takes what it needs from the view when it starts, runs
//! the request on its own, then merges only the fields it owns back into
//! whatever the view has become.  Dialogs opened, forms typed into and
//! deletes armed in the meantime are left alone.  Failures have already
//! been shown by the client's reporter and are otherwise dropped here.

use leptos::{
    prelude::*,
    task::spawn_local,
};
use pubcore::resource::ResourceBackend;
use pubctrl::{
    confirm::ConfirmChoice,
    view::CrudView,
};
use std::future::Future;

use crate::component::{
    ConfirmDialog,
    Spinner,
};

pub type ViewState<B> = RwSignal<CrudView<B>, LocalStorage>;

pub fn use_crud_view<B>(view: CrudView<B>) -> ViewState<B>
where
    B: ResourceBackend + Clone + 'static,
{
    RwSignal::new_local(view)
}

fn merge<B, T>(
    state: ViewState<B>,
    f: impl FnOnce(&mut CrudView<B>) -> T,
) -> Option<T>
where
    B: ResourceBackend + Clone + 'static,
{
    let merged = state.try_update(f);
    if merged.is_none() {
        log::debug!("view went away before the request completed");
    }
    merged
}

fn load_task<B>(state: ViewState<B>) -> impl Future<Output = ()> + 'static
where
    B: ResourceBackend + Clone + 'static,
{
    let (backend, query) = state.with_untracked(|view| {
        (view.backend().clone(), view.list_query())
    });
    state.update(|view| view.loading = true);
    async move {
        let result = backend.list(&query).await;
        merge(state, move |view| {
            let _ = view.finish_load(result);
        });
    }
}

fn save_task<B>(state: ViewState<B>) -> impl Future<Output = ()> + 'static
where
    B: ResourceBackend + Clone + 'static,
{
    let (backend, submission) = state.with_untracked(|view| {
        (view.backend().clone(), view.submission())
    });
    async move {
        let result = submission.send(&backend).await;
        if let Some(Ok(_)) = merge(state, move |view| view.finish_save(result)) {
            load_task(state).await;
        }
    }
}

fn delete_task<B>(
    state: ViewState<B>,
    choice: ConfirmChoice,
) -> impl Future<Output = ()> + 'static
where
    B: ResourceBackend + Clone + 'static,
{
    let target = match choice {
        ConfirmChoice::Accept => state.with_untracked(|view| view.pending_delete_id()),
        ConfirmChoice::Reject => {
            state.update(|view| view.cancel_delete());
            None
        }
    };
    let backend = state.with_untracked(|view| view.backend().clone());
    async move {
        let Some(id) = target else { return };
        log::debug!("deleting {id}");
        let result = backend.delete(id).await;
        if let Some(Ok(())) = merge(state, move |view| view.finish_delete(result)) {
            load_task(state).await;
        }
    }
}

pub fn reload<B>(state: ViewState<B>)
where
    B: ResourceBackend + Clone + 'static,
{
    spawn_local(load_task(state));
}

/// Apply a change to the listing parameters, then reload.
pub fn refresh<B>(state: ViewState<B>, change: impl FnOnce(&mut CrudView<B>))
where
    B: ResourceBackend + Clone + 'static,
{
    state.update(change);
    reload(state);
}

pub fn save<B>(state: ViewState<B>)
where
    B: ResourceBackend + Clone + 'static,
{
    spawn_local(save_task(state));
}

pub fn resolve_delete<B>(state: ViewState<B>, choice: ConfirmChoice)
where
    B: ResourceBackend + Clone + 'static,
{
    spawn_local(delete_task(state, choice));
}

/// The delete confirmation bound to a view.
pub fn delete_confirm<B>(state: ViewState<B>) -> impl IntoView
where
    B: ResourceBackend + Clone + 'static,
{
    view! {
        <ConfirmDialog
            visible=move || state.with(|view| view.confirm_delete)
            on_accept=move |_| resolve_delete(state, ConfirmChoice::Accept)
            on_reject=move |_| resolve_delete(state, ConfirmChoice::Reject)
        />
    }
}

/// Heading, the "New" button and the loading indicator.
pub fn toolbar<B>(state: ViewState<B>, title: &'static str) -> impl IntoView
where
    B: ResourceBackend + Clone + 'static,
{
    view! {
        <div class="toolbar">
            <h1>{title}</h1>
            <button on:click=move |_| state.update(|view| view.open_new())>"New"</button>
            {move || state.with(|view| view.loading).then(|| view! { <Spinner/> })}
        </div>
    }
}

pub fn dialog_header<B>(state: ViewState<B>, noun: &'static str) -> Signal<String>
where
    B: ResourceBackend + Clone + 'static,
{
    Signal::derive(move || {
        if state.with(|view| view.is_edit) {
            format!("Edit {noun}")
        } else {
            format!("New {noun}")
        }
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pubcore::{
        error::BackendError,
        listing::{
            ListQuery,
            Listing,
        },
        publication::{
            Publication,
            PublicationRequest,
        },
    };
    use std::sync::{
        Arc,
        Mutex,
    };
    use test_pub::fixture;

    use super::*;

    /// An in-memory collection of publications; ids are handed out in
    /// sequence.
    #[derive(Clone, Default)]
    struct Shelf {
        items: Arc<Mutex<Vec<Publication>>>,
    }

    impl Shelf {
        fn with(items: Vec<Publication>) -> Self {
            Self { items: Arc::new(Mutex::new(items)) }
        }

        fn store(&self) -> std::sync::MutexGuard<'_, Vec<Publication>> {
            self.items.lock().unwrap()
        }
    }

    #[async_trait]
    impl ResourceBackend for Shelf {
        type Entity = Publication;

        async fn list(&self, _: &ListQuery) -> Result<Listing<Publication>, BackendError> {
            let items = self.store().clone();
            let total = items.len() as u64;
            Ok(Listing { items, total })
        }

        async fn get(&self, id: i64) -> Result<Publication, BackendError> {
            self.store()
                .iter()
                .find(|item| item.id == id)
                .cloned()
                .ok_or_else(|| fixture::server_error("no such publication"))
        }

        async fn create(&self, request: &PublicationRequest) -> Result<Publication, BackendError> {
            let mut items = self.store();
            let created = Publication {
                id: items.len() as i64 + 1,
                title: request.title.clone(),
                publication_date: Some(request.publication_date.clone()),
            };
            items.push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            id: i64,
            request: &PublicationRequest,
        ) -> Result<Publication, BackendError> {
            let mut items = self.store();
            let item = items.iter_mut()
                .find(|item| item.id == id)
                .ok_or_else(|| fixture::server_error("no such publication"))?;
            item.title = request.title.clone();
            item.publication_date = Some(request.publication_date.clone());
            Ok(item.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), BackendError> {
            self.store().retain(|item| item.id != id);
            Ok(())
        }
    }

    #[async_std::test]
    async fn test_load_keeps_dialog_opened_meanwhile() -> anyhow::Result<()> {
        let shelf = Shelf::with(vec![fixture::publication(1, "Dune")]);
        let state = use_crud_view(CrudView::new(shelf));

        let load = load_task(state);
        assert!(state.with_untracked(|view| view.loading));
        state.update(|view| {
            view.open_new();
            view.form.title = "typed by user".to_string();
        });
        load.await;

        state.with_untracked(|view| {
            assert!(view.display_dialog);
            assert_eq!(view.form.title, "typed by user");
            assert!(!view.loading);
            assert_eq!(view.items, vec![fixture::publication(1, "Dune")]);
            assert_eq!(view.total_records, 1);
        });
        Ok(())
    }

    #[async_std::test]
    async fn test_save_keeps_delete_armed_meanwhile() -> anyhow::Result<()> {
        let dune = fixture::publication(1, "Dune");
        let shelf = Shelf::with(vec![dune.clone()]);
        let state = use_crud_view(CrudView::new(shelf.clone()));
        state.update(|view| {
            view.open_new();
            view.form.title = "Emma".to_string();
            view.form.publication_date = "1815-12-23".to_string();
        });

        let save = save_task(state);
        state.update(|view| view.confirm_delete(dune.clone()));
        save.await;

        state.with_untracked(|view| {
            assert!(!view.display_dialog);
            assert!(view.confirm_delete);
            assert_eq!(view.pending_delete_id(), Some(1));
            assert_eq!(view.items.len(), 2);
            assert_eq!(view.items[1].title, "Emma");
        });
        assert_eq!(shelf.store().len(), 2);
        Ok(())
    }

    #[async_std::test]
    async fn test_failed_save_leaves_view_alone() -> anyhow::Result<()> {
        let state = use_crud_view(CrudView::new(Shelf::default()));
        let ghost = fixture::publication(9, "Ghost");
        state.update(|view| view.open_edit(ghost));

        save_task(state).await;

        state.with_untracked(|view| {
            assert!(view.display_dialog);
            assert_eq!(view.form.title, "Ghost");
            assert!(view.items.is_empty());
        });
        Ok(())
    }

    #[async_std::test]
    async fn test_delete_keeps_form_edited_meanwhile() -> anyhow::Result<()> {
        let dune = fixture::publication(1, "Dune");
        let emma = fixture::publication(2, "Emma");
        let state = use_crud_view(CrudView::new(Shelf::with(vec![dune.clone(), emma.clone()])));
        load_task(state).await;
        state.update(|view| view.confirm_delete(dune));

        let delete = delete_task(state, ConfirmChoice::Accept);
        state.update(|view| {
            view.open_edit(emma.clone());
            view.form.title = "Emma, revised".to_string();
        });
        delete.await;

        state.with_untracked(|view| {
            assert!(!view.confirm_delete);
            assert_eq!(view.pending_delete, None);
            assert_eq!(view.items, vec![emma]);
            assert!(view.display_dialog);
            assert!(view.is_edit);
            assert_eq!(view.form.title, "Emma, revised");
        });
        Ok(())
    }

    #[async_std::test]
    async fn test_rejected_delete_sends_nothing() -> anyhow::Result<()> {
        let dune = fixture::publication(1, "Dune");
        let shelf = Shelf::with(vec![dune.clone()]);
        let state = use_crud_view(CrudView::new(shelf.clone()));
        state.update(|view| view.confirm_delete(dune));

        let reject = delete_task(state, ConfirmChoice::Reject);
        assert!(!state.with_untracked(|view| view.confirm_delete));
        reject.await;

        assert_eq!(shelf.store().len(), 1);
        assert_eq!(state.with_untracked(|view| view.pending_delete_id()), None);
        Ok(())
    }
}

use pubcore::{
    error::BackendError,
    listing::{
        ListQuery,
        Listing,
        SortDirection,
    },
    resource::{
        Entity,
        Form,
        ResourceBackend,
    },
};

use crate::confirm::ConfirmChoice;
use super::{
    CrudView,
    Paging,
    Submission,
};

impl<E: Entity> Submission<E> {
    pub async fn send<B>(&self, backend: &B) -> Result<E, BackendError>
    where
        B: ResourceBackend<Entity = E>,
    {
        match self.id {
            Some(id) => {
                log::debug!("{}: updating {id}", E::PATH);
                backend.update(id, &self.request).await
            }
            None => {
                log::debug!("{}: creating", E::PATH);
                backend.create(&self.request).await
            }
        }
    }
}

impl<B: ResourceBackend> CrudView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            query: ListQuery::default(),
            items: Vec::new(),
            form: Default::default(),
            selected: None,
            is_edit: false,
            display_dialog: false,
            confirm_delete: false,
            pending_delete: None,
            loading: false,
            total_records: 0,
            paging: None,
        }
    }

    /// A view whose listing is requested one page at a time.
    pub fn paged(backend: B, paging: Paging) -> Self {
        Self {
            paging: Some(paging),
            ..Self::new(backend)
        }
    }

    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.query = query;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn base_query(&self) -> &ListQuery {
        &self.query
    }

    /// The query sent by `load`, with the paging state folded in.
    pub fn list_query(&self) -> ListQuery {
        let mut query = self.query.clone();
        if let Some(paging) = &self.paging {
            query.page = Some(paging.page);
            query.page_size = Some(paging.page_size);
            query.sort = Some(paging.sort);
        }
        query
    }

    /// Names of required form fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.form.missing_fields()
    }

    pub async fn load(&mut self) -> Result<(), BackendError> {
        self.loading = true;
        let query = self.list_query();
        let result = self.backend.list(&query).await;
        self.finish_load(result)
    }

    /// Take in the outcome of a list request.  Only `items`, `loading` and
    /// the record totals are written; on error the items are kept.
    pub fn finish_load(
        &mut self,
        result: Result<Listing<B::Entity>, BackendError>,
    ) -> Result<(), BackendError> {
        self.loading = false;
        let listing = result?;
        log::trace!(
            "{}: loaded {} of {}",
            <B::Entity as Entity>::PATH,
            listing.items.len(),
            listing.total,
        );
        self.total_records = listing.total;
        if let Some(paging) = self.paging.as_mut() {
            paging.total_records = listing.total;
        }
        self.items = listing.items;
        Ok(())
    }

    pub fn open_new(&mut self) {
        self.form = Default::default();
        self.is_edit = false;
        self.selected = None;
        self.display_dialog = true;
    }

    pub fn open_edit(&mut self, entity: B::Entity) {
        self.form = entity.to_form();
        self.is_edit = true;
        self.selected = Some(entity);
        self.display_dialog = true;
    }

    pub fn hide_dialog(&mut self) {
        self.display_dialog = false;
    }

    /// The request `save` would send for the current form.
    pub fn submission(&self) -> Submission<B::Entity> {
        let id = match (self.is_edit, &self.selected) {
            (true, Some(selected)) => Some(selected.id()),
            _ => None,
        };
        Submission {
            id,
            request: <B::Entity as Entity>::to_request(&self.form),
        }
    }

    /// Take in the outcome of a submission; the dialog closes on success.
    pub fn finish_save(
        &mut self,
        result: Result<B::Entity, BackendError>,
    ) -> Result<B::Entity, BackendError> {
        let saved = result?;
        self.hide_dialog();
        Ok(saved)
    }

    /// Submit the form as an update of the selection, or as a new entity.
    ///
    /// The dialog only closes once the backend accepts the request, after
    /// which the listing is reloaded once.  A failed reload is reported by
    /// the backend but does not undo the save.
    pub async fn save(&mut self) -> Result<B::Entity, BackendError> {
        let result = self.submission().send(&self.backend).await;
        let saved = self.finish_save(result)?;
        if let Err(e) = self.load().await {
            log::debug!("reload after save failed: {e}");
        }
        Ok(saved)
    }

    pub fn confirm_delete(&mut self, entity: B::Entity) {
        self.pending_delete = Some(entity);
        self.confirm_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.confirm_delete = false;
    }

    /// Identifier of the entity armed by `confirm_delete`.
    pub fn pending_delete_id(&self) -> Option<i64> {
        self.pending_delete.as_ref().map(|entity| entity.id())
    }

    /// Take in the outcome of a delete request.  Success disarms the
    /// confirmation; a failure leaves it armed.
    pub fn finish_delete(
        &mut self,
        result: Result<(), BackendError>,
    ) -> Result<(), BackendError> {
        result?;
        self.cancel_delete();
        Ok(())
    }

    /// Delete the entity armed by `confirm_delete`; without one, nothing
    /// is sent.
    pub async fn delete(&mut self) -> Result<(), BackendError> {
        let id = match self.pending_delete_id() {
            Some(id) => id,
            None => return Ok(()),
        };
        log::debug!("{}: deleting {id}", <B::Entity as Entity>::PATH);
        let result = self.backend.delete(id).await;
        self.finish_delete(result)?;
        if let Err(e) = self.load().await {
            log::debug!("reload after delete failed: {e}");
        }
        Ok(())
    }

    /// Act on the answer given to the confirmation dialog.
    pub async fn resolve_delete(&mut self, choice: ConfirmChoice) -> Result<(), BackendError> {
        match choice {
            ConfirmChoice::Accept => self.delete().await,
            ConfirmChoice::Reject => {
                self.cancel_delete();
                Ok(())
            }
        }
    }

    pub fn select_page(&mut self, page: u32, page_size: u32) {
        let paging = self.paging.get_or_insert_with(Paging::default);
        paging.page = page;
        paging.page_size = page_size;
    }

    pub fn select_sort(&mut self, sort: SortDirection) {
        self.paging.get_or_insert_with(Paging::default).sort = sort;
    }

    /// Restrict the listing to matching titles; a blank title clears it.
    /// Paged views go back to the first page.
    pub fn select_title(&mut self, title: Option<String>) {
        self.query.title = title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty());
        if let Some(paging) = self.paging.as_mut() {
            paging.page = 0;
        }
    }

    pub async fn change_page(&mut self, page: u32, page_size: u32) -> Result<(), BackendError> {
        self.select_page(page, page_size);
        self.load().await
    }

    pub async fn set_sort(&mut self, sort: SortDirection) -> Result<(), BackendError> {
        self.select_sort(sort);
        self.load().await
    }

    pub async fn set_title_filter(&mut self, title: Option<String>) -> Result<(), BackendError> {
        self.select_title(title);
        self.load().await
    }
}

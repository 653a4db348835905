use pubcore::{
    listing::{
        ListQuery,
        SortDirection,
    },
    resource::{
        Entity,
        FormOf,
        ResourceBackend,
    },
};

/// Paging state for views backed by a paged collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paging {
    pub page: u32,
    pub page_size: u32,
    pub total_records: u64,
    pub sort: SortDirection,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
            total_records: 0,
            sort: SortDirection::Asc,
        }
    }
}

/// The list/edit/delete state behind one entity screen.
///
/// Every mutating operation goes through the backend and then reloads the
/// list; nothing here caches beyond the last successful listing.  Failures
/// are returned to the caller, the backend having already reported them.
///
/// Each async operation is also available as a request taken from the view
/// and a `finish_*` step merging the outcome back, for callers that hold
/// the view somewhere it cannot be borrowed across an await.  A `finish_*`
/// step only writes the fields its operation owns.
pub struct CrudView<B: ResourceBackend> {
    backend: B,
    query: ListQuery,
    pub items: Vec<B::Entity>,
    pub form: FormOf<B>,
    pub selected: Option<B::Entity>,
    pub is_edit: bool,
    pub display_dialog: bool,
    pub confirm_delete: bool,
    pub pending_delete: Option<B::Entity>,
    pub loading: bool,
    pub total_records: u64,
    pub paging: Option<Paging>,
}

/// A save request taken from the form: an update of `id`, or a create.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<E: Entity> {
    pub id: Option<i64>,
    pub request: E::Request,
}

impl<B: ResourceBackend + Clone> Clone for CrudView<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            query: self.query.clone(),
            items: self.items.clone(),
            form: self.form.clone(),
            selected: self.selected.clone(),
            is_edit: self.is_edit,
            display_dialog: self.display_dialog,
            confirm_delete: self.confirm_delete,
            pending_delete: self.pending_delete.clone(),
            loading: self.loading,
            total_records: self.total_records,
            paging: self.paging,
        }
    }
}

mod impls;

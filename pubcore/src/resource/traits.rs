mod data {
    use serde::{
        de::DeserializeOwned,
        Serialize,
    };
    use std::fmt::Debug;

    /// A backend-owned record.
    ///
    /// Identifiers are only ever assigned by the backend; the client reads
    /// them through `id` and never fabricates one.
    pub trait Entity: Clone + Debug + PartialEq + DeserializeOwned + Serialize + Send + Sync + 'static {
        /// The draft edited in the create/edit dialog.
        type Form: Form;
        /// The body sent on create and update; never carries the identifier.
        type Request: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static;

        /// Collection path relative to the API base URL.
        const PATH: &'static str;

        fn id(&self) -> i64;
        /// Copy the editable fields into a fresh form.
        fn to_form(&self) -> Self::Form;
        fn to_request(form: &Self::Form) -> Self::Request;
    }

    pub trait Form: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
        /// Names of required fields that are still empty.
        fn missing_fields(&self) -> Vec<&'static str>;

        fn is_complete(&self) -> bool {
            self.missing_fields().is_empty()
        }
    }
}

mod backend {
    use async_trait::async_trait;
    use crate::{
        error::BackendError,
        listing::{
            ListQuery,
            Listing,
        },
    };
    use super::data::Entity;

    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    pub trait ResourceBackend {
        type Entity: Entity;

        /// Fetch one page (or the whole collection) of entities.
        async fn list(
            &self,
            query: &ListQuery,
        ) -> Result<Listing<Self::Entity>, BackendError>;
        async fn get(
            &self,
            id: i64,
        ) -> Result<Self::Entity, BackendError>;
        async fn create(
            &self,
            request: &<Self::Entity as Entity>::Request,
        ) -> Result<Self::Entity, BackendError>;
        async fn update(
            &self,
            id: i64,
            request: &<Self::Entity as Entity>::Request,
        ) -> Result<Self::Entity, BackendError>;
        async fn delete(
            &self,
            id: i64,
        ) -> Result<(), BackendError>;
    }
}

pub use data::{
    Entity,
    Form,
};
pub use backend::ResourceBackend;

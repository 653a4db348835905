use async_trait::async_trait;
use pubcore::{
    author::Author,
    book::Book,
    error::BackendError,
    listing::{
        decode_entity,
        ListQuery,
        Listing,
    },
    magazine::Magazine,
    publication::Publication,
    resource::{
        Entity,
        ResourceBackend,
    },
};
use std::marker::PhantomData;

use crate::client::ApiClient;

/// Maps the CRUD verbs of one entity onto its REST collection path.
pub struct RestService<T> {
    client: ApiClient,
    _entity: PhantomData<fn() -> T>,
}

pub type AuthorService = RestService<Author>;
pub type BookService = RestService<Book>;
pub type MagazineService = RestService<Magazine>;
pub type PublicationService = RestService<Publication>;

impl<T> Clone for RestService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> RestService<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{id}", T::PATH)
    }

    async fn list_at(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<Listing<T>, BackendError> {
        let value = self.client.get(path, &query.to_pairs()).await?;
        let listing = Listing::from_value(value)
            .map_err(|e| self.client.handle_error(e))?;
        log::trace!("{path}: received {} of {}", listing.items.len(), listing.total);
        Ok(listing)
    }

    fn decode(&self, value: serde_json::Value) -> Result<T, BackendError> {
        decode_entity(value).map_err(|e| self.client.handle_error(e))
    }
}

impl RestService<Book> {
    /// Books written by the given author.
    pub async fn list_by_author(
        &self,
        author_id: i64,
        query: &ListQuery,
    ) -> Result<Listing<Book>, BackendError> {
        self.list_at(&format!("{}/author/{author_id}", Book::PATH), query).await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: Entity> ResourceBackend for RestService<T> {
    type Entity = T;

    async fn list(
        &self,
        query: &ListQuery,
    ) -> Result<Listing<T>, BackendError> {
        self.list_at(T::PATH, query).await
    }

    async fn get(
        &self,
        id: i64,
    ) -> Result<T, BackendError> {
        let value = self.client.get(&Self::item_path(id), &[]).await?;
        self.decode(value)
    }

    async fn create(
        &self,
        request: &T::Request,
    ) -> Result<T, BackendError> {
        let value = self.client.post(T::PATH, request).await?;
        self.decode(value)
    }

    async fn update(
        &self,
        id: i64,
        request: &T::Request,
    ) -> Result<T, BackendError> {
        let value = self.client.put(&Self::item_path(id), request).await?;
        self.decode(value)
    }

    async fn delete(
        &self,
        id: i64,
    ) -> Result<(), BackendError> {
        self.client.delete(&Self::item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths() -> anyhow::Result<()> {
        assert_eq!(AuthorService::item_path(3), "/authors/3");
        assert_eq!(MagazineService::item_path(14), "/magazines/14");
        let service = PublicationService::new(ApiClient::new("http://localhost:8080/api/v1")?);
        assert_eq!(
            service.client.url(&PublicationService::item_path(2)),
            "http://localhost:8080/api/v1/publications/2",
        );
        assert_eq!(
            service.client.url(Book::PATH),
            "http://localhost:8080/api/v1/books",
        );
        Ok(())
    }
}

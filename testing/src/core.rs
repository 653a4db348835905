use async_trait::async_trait;
use mockall::mock;
use pubcore::{
    author::{
        Author,
        AuthorRequest,
    },
    book::{
        Book,
        BookRequest,
    },
    error::BackendError,
    listing::{
        ListQuery,
        Listing,
    },
    magazine::{
        Magazine,
        MagazineRequest,
    },
    publication::{
        Publication,
        PublicationRequest,
    },
    resource::ResourceBackend,
};

macro_rules! resource_mock {
    ($name:ident, $entity:ident, $request:ident) => {
        mock! {
            pub $name {}

            #[async_trait]
            impl ResourceBackend for $name {
                type Entity = $entity;

                async fn list(
                    &self,
                    query: &ListQuery,
                ) -> Result<Listing<$entity>, BackendError>;
                async fn get(
                    &self,
                    id: i64,
                ) -> Result<$entity, BackendError>;
                async fn create(
                    &self,
                    request: &$request,
                ) -> Result<$entity, BackendError>;
                async fn update(
                    &self,
                    id: i64,
                    request: &$request,
                ) -> Result<$entity, BackendError>;
                async fn delete(
                    &self,
                    id: i64,
                ) -> Result<(), BackendError>;
            }
        }
    };
}

resource_mock!(Authors, Author, AuthorRequest);
resource_mock!(Books, Book, BookRequest);
resource_mock!(Magazines, Magazine, MagazineRequest);
resource_mock!(Publications, Publication, PublicationRequest);

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use super::*;

    #[async_std::test]
    async fn mock_delete() -> anyhow::Result<()> {
        let mut backend = MockAuthors::new();
        backend.expect_delete()
            .times(1)
            .with(eq(4))
            .returning(|_| Ok(()));
        backend.delete(4).await?;
        Ok(())
    }
}

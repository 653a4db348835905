mod client;
mod error;
mod service;

pub use client::{
    ApiClient,
    DEFAULT_BASE_URL,
};
pub use service::{
    AuthorService,
    BookService,
    MagazineService,
    PublicationService,
    RestService,
};

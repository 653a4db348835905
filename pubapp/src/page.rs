mod author;
mod book;
mod magazine;
mod publication;

pub use self::author::AuthorPage;
pub use self::book::BookPage;
pub use self::magazine::MagazinePage;
pub use self::publication::PublicationPage;

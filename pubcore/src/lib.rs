pub mod author;
pub mod book;
pub mod error;
pub mod input;
pub mod listing;
pub mod magazine;
pub mod publication;
pub mod report;
pub mod resource;

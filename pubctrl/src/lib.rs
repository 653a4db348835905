pub mod confirm;
pub mod error;
pub mod report;
pub mod route;
pub mod view;

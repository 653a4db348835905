pub mod traits;

pub use traits::{
    Entity,
    Form,
    ResourceBackend,
};

/// Shorthand for the request body a backend accepts for create/update.
pub type RequestOf<B> = <<B as ResourceBackend>::Entity as Entity>::Request;
/// Shorthand for the form draft edited in a dialog for a backend's entity.
pub type FormOf<B> = <<B as ResourceBackend>::Entity as Entity>::Form;

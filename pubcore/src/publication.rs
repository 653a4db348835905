use serde::{Deserialize, Serialize};

use crate::resource::{
    Entity,
    Form,
};

/// The common part of books and magazines, used for cross-entity search.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publication_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRequest {
    pub title: String,
    pub publication_date: String,
}

impl Form for PublicationRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        missing
    }
}

impl Entity for Publication {
    type Form = PublicationRequest;
    type Request = PublicationRequest;

    const PATH: &'static str = "/publications";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_form(&self) -> PublicationRequest {
        PublicationRequest {
            title: self.title.clone(),
            publication_date: self.publication_date.clone().unwrap_or_default(),
        }
    }

    fn to_request(form: &PublicationRequest) -> PublicationRequest {
        form.clone()
    }
}

mod display {
    use std::fmt::{Display, Formatter, Result};
    use super::Publication;

    impl Display for Publication {
        fn fmt(&self, f: &mut Formatter) -> Result {
            write!(f, "[{}] {}", self.id, self.title)?;
            if let Some(publication_date) = &self.publication_date {
                write!(f, " ({publication_date})")?;
            }
            Ok(())
        }
    }
}

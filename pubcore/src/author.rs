use serde::{Deserialize, Serialize};

use crate::resource::{
    Entity,
    Form,
};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

/// Draft and request body for creating or updating an author.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub name: String,
    pub birth_date: String,
    pub nationality: String,
}

impl Form for AuthorRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        missing
    }
}

impl Entity for Author {
    type Form = AuthorRequest;
    type Request = AuthorRequest;

    const PATH: &'static str = "/authors";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_form(&self) -> AuthorRequest {
        AuthorRequest {
            name: self.name.clone(),
            birth_date: self.birth_date.clone().unwrap_or_default(),
            nationality: self.nationality.clone().unwrap_or_default(),
        }
    }

    fn to_request(form: &AuthorRequest) -> AuthorRequest {
        form.clone()
    }
}

mod display {
    use std::fmt::{Display, Formatter, Result};
    use super::Author;

    impl Display for Author {
        fn fmt(&self, f: &mut Formatter) -> Result {
            write!(f, "[{}] {}", self.id, self.name)?;
            if let Some(birth_date) = &self.birth_date {
                write!(f, ", born {birth_date}")?;
            }
            if let Some(nationality) = &self.nationality {
                write!(f, " ({nationality})")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults() {
        assert_eq!(AuthorRequest::default(), AuthorRequest {
            name: "".to_string(),
            birth_date: "".to_string(),
            nationality: "".to_string(),
        });
        assert_eq!(AuthorRequest::default().missing_fields(), vec!["name"]);
    }

    #[test]
    fn edit_copies_fields() {
        let author = Author {
            id: 12,
            name: "Ursula".to_string(),
            birth_date: Some("1929-10-21".to_string()),
            nationality: None,
        };
        let form = author.to_form();
        assert_eq!(form.name, "Ursula");
        assert_eq!(form.birth_date, "1929-10-21");
        assert_eq!(form.nationality, "");
        assert!(form.is_complete());
        assert_eq!(author.to_string(), "[12] Ursula, born 1929-10-21");
    }

    #[test]
    fn request_wire_format() -> anyhow::Result<()> {
        let request = AuthorRequest {
            name: "Ann".to_string(),
            birth_date: "1980-02-03".to_string(),
            nationality: "NZ".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            serde_json::json!({
                "name": "Ann",
                "birthDate": "1980-02-03",
                "nationality": "NZ",
            }),
        );
        Ok(())
    }
}

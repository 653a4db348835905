use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    author::Author,
    input::NumberInput,
    resource::{
        Entity,
        Form,
    },
};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Magazine {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub issue_number: Option<i64>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

/// Author identifiers as edited in the magazine dialog.
///
/// Editing an existing magazine yields a list, while the dialog's text input
/// produces free text such as `"1, 2, 3"`; both normalize to a numeric list.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AuthorIds {
    List(Vec<i64>),
    Text(String),
}

impl Default for AuthorIds {
    fn default() -> Self {
        AuthorIds::List(Vec::new())
    }
}

impl AuthorIds {
    pub fn normalize(&self) -> Vec<i64> {
        match self {
            AuthorIds::List(ids) => ids.clone(),
            AuthorIds::Text(text) => parse_author_ids(text),
        }
    }
}

impl fmt::Display for AuthorIds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthorIds::List(ids) => {
                let mut first = true;
                for id in ids {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    write!(f, "{id}")?;
                }
                Ok(())
            }
            AuthorIds::Text(text) => f.write_str(text),
        }
    }
}

/// Split comma separated identifiers, dropping pieces that are not integers.
pub fn parse_author_ids(text: &str) -> Vec<i64> {
    text.split(',')
        .filter_map(|piece| piece.trim().parse::<i64>().ok())
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MagazineForm {
    pub title: String,
    pub publication_date: String,
    pub issue_number: NumberInput,
    pub author_ids: AuthorIds,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MagazineRequest {
    pub title: String,
    pub publication_date: String,
    pub issue_number: i64,
    pub author_ids: Vec<i64>,
}

impl Form for MagazineForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.publication_date.trim().is_empty() {
            missing.push("publicationDate");
        }
        missing
    }
}

impl Entity for Magazine {
    type Form = MagazineForm;
    type Request = MagazineRequest;

    const PATH: &'static str = "/magazines";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_form(&self) -> MagazineForm {
        MagazineForm {
            title: self.title.clone(),
            publication_date: self.publication_date.clone().unwrap_or_default(),
            issue_number: self.issue_number.unwrap_or(0).into(),
            author_ids: AuthorIds::List(
                self.authors.iter().map(|author| author.id).collect()
            ),
        }
    }

    fn to_request(form: &MagazineForm) -> MagazineRequest {
        MagazineRequest {
            title: form.title.clone(),
            publication_date: form.publication_date.clone(),
            issue_number: form.issue_number.value(),
            author_ids: form.author_ids.normalize(),
        }
    }
}

mod display {
    use std::fmt::{Display, Formatter, Result};
    use super::Magazine;

    impl Display for Magazine {
        fn fmt(&self, f: &mut Formatter) -> Result {
            write!(f, "[{}] {}", self.id, self.title)?;
            if let Some(issue_number) = self.issue_number {
                write!(f, " #{issue_number}")?;
            }
            if !self.authors.is_empty() {
                let names = self.authors.iter()
                    .map(|author| author.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, " ({names})")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_ids_from_text() {
        assert_eq!(parse_author_ids("1, 2, abc,3"), vec![1, 2, 3]);
        assert_eq!(parse_author_ids(""), Vec::<i64>::new());
        assert_eq!(parse_author_ids(" 7 ,, 8 "), vec![7, 8]);
        assert_eq!(AuthorIds::Text("4,x".to_string()).normalize(), vec![4]);
        assert_eq!(AuthorIds::List(vec![5, 6]).normalize(), vec![5, 6]);
    }

    #[test]
    fn author_ids_display() {
        assert_eq!(AuthorIds::List(vec![1, 2, 3]).to_string(), "1, 2, 3");
        assert_eq!(AuthorIds::default().to_string(), "");
        assert_eq!(AuthorIds::Text("1,a".to_string()).to_string(), "1,a");
    }

    #[test]
    fn form_defaults() {
        let form = MagazineForm::default();
        assert_eq!(form.title, "");
        assert_eq!(form.publication_date, "");
        assert_eq!(form.issue_number, NumberInput::Value(0));
        assert_eq!(form.author_ids, AuthorIds::List(vec![]));
    }

    #[test]
    fn request_normalizes_text_ids() -> anyhow::Result<()> {
        let form = MagazineForm {
            title: "Byte".to_string(),
            publication_date: "1984-01-01".to_string(),
            issue_number: NumberInput::Text("12".to_string()),
            author_ids: AuthorIds::Text("1, 2, abc,3".to_string()),
        };
        let request = Magazine::to_request(&form);
        assert_eq!(
            serde_json::to_value(&request)?,
            serde_json::json!({
                "title": "Byte",
                "publicationDate": "1984-01-01",
                "issueNumber": 12,
                "authorIds": [1, 2, 3],
            }),
        );
        Ok(())
    }

    #[test]
    fn edit_collects_author_ids() -> anyhow::Result<()> {
        let magazine: Magazine = serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Byte",
            "publicationDate": "1984-01-01",
            "issueNumber": 12,
            "authors": [{ "id": 4, "name": "A" }, { "id": 8, "name": "B" }],
        }))?;
        let form = magazine.to_form();
        assert_eq!(form.author_ids, AuthorIds::List(vec![4, 8]));
        assert_eq!(form.issue_number, NumberInput::Value(12));
        assert_eq!(magazine.to_string(), "[3] Byte #12 (A, B)");
        Ok(())
    }
}

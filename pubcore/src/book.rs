use serde::{Deserialize, Serialize};

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
pub struct Book {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: String,
    pub publication_date: String,
    pub isbn: String,
    pub author_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub publication_date: String,
    pub isbn: String,
    pub author_id: NumberInput,
}

impl Form for BookForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("publicationDate", &self.publication_date),
            ("isbn", &self.isbn),
        ]
            .into_iter()
            .filter_map(|(name, value)| value.trim().is_empty().then_some(name))
            .collect()
    }
}

impl Entity for Book {
    type Form = BookForm;
    type Request = BookRequest;

    const PATH: &'static str = "/books";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_form(&self) -> BookForm {
        BookForm {
            title: self.title.clone(),
            publication_date: self.publication_date.clone().unwrap_or_default(),
            isbn: self.isbn.clone().unwrap_or_default(),
            author_id: self.author.as_ref().map(|author| author.id).unwrap_or(0).into(),
        }
    }

    fn to_request(form: &BookForm) -> BookRequest {
        BookRequest {
            title: form.title.clone(),
            publication_date: form.publication_date.clone(),
            isbn: form.isbn.clone(),
            author_id: form.author_id.value(),
        }
    }
}

mod display {
    use std::fmt::{Display, Formatter, Result};
    use super::Book;

    impl Display for Book {
        fn fmt(&self, f: &mut Formatter) -> Result {
            write!(f, "[{}] {}", self.id, self.title)?;
            if let Some(isbn) = &self.isbn {
                write!(f, " ISBN {isbn}")?;
            }
            if let Some(author) = &self.author {
                write!(f, " by {}", author.name)?;
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
        let form = BookForm::default();
        assert_eq!(form.author_id, NumberInput::Value(0));
        assert_eq!(form.missing_fields(), vec!["title", "publicationDate", "isbn"]);
    }

    #[test]
    fn edit_takes_embedded_author_id() -> anyhow::Result<()> {
        let book: Book = serde_json::from_value(serde_json::json!({
            "id": 5,
            "title": "Dune",
            "publicationDate": "1965-08-01",
            "isbn": "978-0441013593",
            "author": { "id": 9, "name": "Frank Herbert" },
        }))?;
        let form = book.to_form();
        assert_eq!(form.author_id, NumberInput::Value(9));
        assert_eq!(form.isbn, "978-0441013593");
        assert!(form.is_complete());
        assert_eq!(book.to_string(), "[5] Dune ISBN 978-0441013593 by Frank Herbert");

        let orphan = Book { author: None, ..book };
        assert_eq!(orphan.to_form().author_id, NumberInput::Value(0));
        Ok(())
    }

    #[test]
    fn request_reads_typed_author_id() -> anyhow::Result<()> {
        let mut form = BookForm {
            title: "Dune".to_string(),
            publication_date: "1965-08-01".to_string(),
            isbn: "978-0441013593".to_string(),
            author_id: NumberInput::Text(" 9 ".to_string()),
        };
        assert_eq!(
            serde_json::to_value(Book::to_request(&form))?,
            serde_json::json!({
                "title": "Dune",
                "publicationDate": "1965-08-01",
                "isbn": "978-0441013593",
                "authorId": 9,
            }),
        );

        form.author_id = NumberInput::Text("-".to_string());
        assert_eq!(Book::to_request(&form).author_id, 0);
        Ok(())
    }
}

//! Sample records and response bodies shaped like the backend's.

use pubcore::{
    author::Author,
    book::Book,
    error::{
        BackendError,
        StatusCode,
    },
    magazine::Magazine,
    publication::Publication,
};
use serde_json::{
    json,
    Value,
};

pub fn author(id: i64, name: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        birth_date: Some("1950-05-05".to_string()),
        nationality: Some("British".to_string()),
    }
}

pub fn book(id: i64, title: &str, author: Option<Author>) -> Book {
    Book {
        id,
        title: title.to_string(),
        publication_date: Some("2001-02-03".to_string()),
        isbn: Some(format!("978-0-00-{id:06}-0")),
        author,
    }
}

pub fn magazine(id: i64, title: &str, authors: Vec<Author>) -> Magazine {
    Magazine {
        id,
        title: title.to_string(),
        publication_date: Some("1999-09-09".to_string()),
        issue_number: Some(id),
        authors,
    }
}

pub fn publication(id: i64, title: &str) -> Publication {
    Publication {
        id,
        title: title.to_string(),
        publication_date: Some("2010-10-10".to_string()),
    }
}

/// A single page of magazines wrapped in the response envelope.
pub fn magazine_page(first_id: i64, count: i64, total: u64) -> Value {
    let content = (first_id..first_id + count)
        .map(|id| json!({
            "id": id,
            "title": format!("Issue {id}"),
            "publicationDate": "1999-09-09",
            "issueNumber": id,
            "authors": [],
        }))
        .collect::<Vec<_>>();
    json!({
        "success": true,
        "message": "Magazines retrieved",
        "data": {
            "content": content,
            "totalElements": total,
            "size": count,
            "number": 0,
        },
    })
}

/// A single page of books wrapped in the response envelope.
pub fn book_page(first_id: i64, count: i64, total: u64) -> Value {
    let content = (first_id..first_id + count)
        .map(|id| json!({
            "id": id,
            "title": format!("Volume {id}"),
            "publicationDate": "2001-02-03",
            "isbn": format!("978-0-00-{id:06}-0"),
            "author": null,
        }))
        .collect::<Vec<_>>();
    json!({
        "success": true,
        "message": "Books retrieved",
        "data": {
            "content": content,
            "totalElements": total,
            "size": count,
            "number": 0,
        },
    })
}

pub fn server_error(message: &str) -> BackendError {
    BackendError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: message.to_string(),
    }
}

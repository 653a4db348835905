use crate::error::CtrlError;

/// The client-side views reachable from the navigation bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Books,
    Magazines,
    Authors,
    Publications {
        title: Option<String>,
    },
}

/// Navigation bar entries, in display order.
pub const NAV_ITEMS: [Route; 4] = [
    Route::Books,
    Route::Magazines,
    Route::Authors,
    Route::Publications { title: None },
];

impl Route {
    /// Resolve a location; the empty path redirects to the default view.
    pub fn parse(path: &str, query: Option<&str>) -> Result<Self, CtrlError> {
        match path.trim_matches('/') {
            "" => Ok(Route::default()),
            "books" => Ok(Route::Books),
            "magazines" => Ok(Route::Magazines),
            "authors" => Ok(Route::Authors),
            "publications" => Ok(Route::Publications {
                title: query.and_then(title_param),
            }),
            other => Err(CtrlError::UnknownRoute(other.to_string())),
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Books => "/books",
            Route::Magazines => "/magazines",
            Route::Authors => "/authors",
            Route::Publications { .. } => "/publications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Books => "Books",
            Route::Magazines => "Magazines",
            Route::Authors => "Authors",
            Route::Publications { .. } => "Publications",
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Publications { title: Some(title) } => {
                match serde_urlencoded::to_string(vec![("title", title.as_str())]) {
                    Ok(query) => format!("{}?{query}", self.path()),
                    Err(_) => self.path().to_string(),
                }
            }
            _ => self.path().to_string(),
        }
    }
}

fn title_param(query: &str) -> Option<String> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(query.trim_start_matches('?'))
        .ok()?
        .into_iter()
        .find(|(key, _)| key == "title")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Where the navbar search box leads; blank searches go nowhere.
pub fn search(title: &str) -> Option<Route> {
    let title = title.trim();
    (!title.is_empty()).then(|| Route::Publications {
        title: Some(title.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_paths() {
        assert_eq!(Route::parse("", None), Ok(Route::Books));
        assert_eq!(Route::parse("/", None), Ok(Route::Books));
        assert_eq!(Route::parse("/magazines", None), Ok(Route::Magazines));
        assert_eq!(Route::parse("authors/", None), Ok(Route::Authors));
        assert_eq!(
            Route::parse("/publishers", None),
            Err(CtrlError::UnknownRoute("publishers".to_string())),
        );
    }

    #[test]
    fn publications_title() {
        assert_eq!(
            Route::parse("/publications", Some("?title=The+Left+Hand&page=2")),
            Ok(Route::Publications { title: Some("The Left Hand".to_string()) }),
        );
        assert_eq!(
            Route::parse("/publications", Some("title=")),
            Ok(Route::Publications { title: None }),
        );
        assert_eq!(
            Route::parse("/publications", None),
            Ok(Route::Publications { title: None }),
        );
    }

    #[test]
    fn href_round_trip() {
        let route = Route::Publications { title: Some("Dune & Sons".to_string()) };
        let href = route.href();
        assert_eq!(href, "/publications?title=Dune+%26+Sons");
        let (path, query) = href.split_once('?').unwrap();
        assert_eq!(Route::parse(path, Some(query)), Ok(route));

        for item in NAV_ITEMS.iter() {
            assert_eq!(Route::parse(&item.href(), None).as_ref(), Ok(item));
        }
    }

    #[test]
    fn navbar_search() {
        assert_eq!(search("   "), None);
        assert_eq!(search(""), None);
        assert_eq!(
            search(" Byte ").map(|route| route.href()),
            Some("/publications?title=Byte".to_string()),
        );
    }
}

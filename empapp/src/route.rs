use std::collections::HashMap;

/// Parameters extracted from a route path, or from the query string of
/// the current location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(args: [(K, V); N]) -> Self {
        Self(args.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

/// The routes available under the path of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityRoute {
    /// `""`
    List,
    /// `":id/view"`
    View(String),
    /// `"new"`
    New,
    /// `":id/edit"`
    Edit(String),
}

impl EntityRoute {
    pub fn parse(path: &str) -> Option<Self> {
        let segments = path.trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        match segments.as_slice() {
            [] => Some(Self::List),
            ["new"] => Some(Self::New),
            [id, "view"] => Some(Self::View(id.to_string())),
            [id, "edit"] => Some(Self::Edit(id.to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => String::new(),
            Self::New => "new".to_string(),
            Self::View(id) => format!("{id}/view"),
            Self::Edit(id) => format!("{id}/edit"),
        }
    }

    pub fn params(&self) -> RouteParams {
        match self {
            Self::View(id) | Self::Edit(id) => RouteParams::from([("id", id.as_str())]),
            Self::List | Self::New => RouteParams::new(),
        }
    }

    /// Whether the entity is resolved before the route activates.
    pub fn needs_resolve(&self) -> bool {
        !matches!(self, Self::List)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(EntityRoute::parse(""), Some(EntityRoute::List));
        assert_eq!(EntityRoute::parse("/"), Some(EntityRoute::List));
        assert_eq!(EntityRoute::parse("new"), Some(EntityRoute::New));
        assert_eq!(EntityRoute::parse("123/view"), Some(EntityRoute::View("123".into())));
        assert_eq!(EntityRoute::parse("/123/edit/"), Some(EntityRoute::Edit("123".into())));
        assert_eq!(EntityRoute::parse("123"), None);
        assert_eq!(EntityRoute::parse("123/delete"), None);
        assert_eq!(EntityRoute::parse("new/edit/1"), None);
    }

    #[test]
    fn path_and_params() {
        for path in ["", "new", "1/view", "2/edit"] {
            let route = EntityRoute::parse(path).expect("known route");
            assert_eq!(route.path(), path);
        }
        let route = EntityRoute::Edit("123".into());
        assert_eq!(route.params().get("id"), Some("123"));
        assert!(route.needs_resolve());
        assert_eq!(EntityRoute::New.params(), RouteParams::new());
        assert!(EntityRoute::New.needs_resolve());
        assert!(!EntityRoute::List.needs_resolve());
    }
}

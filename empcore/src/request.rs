/// Query parameters attached to a collection request.
///
/// Parameters are kept in insertion order.  Setting a parameter that is
/// already present replaces its value in place, with the exception of
/// `sort` which may appear any number of times.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    params: Vec<(String, String)>,
}

/// A free-text search against the `_search` resource of an entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Search {
    pub query: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key.into(), value.to_string());
        self
    }

    pub fn page(self, value: u32) -> Self {
        self.param("page", value)
    }

    pub fn size(self, value: u32) -> Self {
        self.param("size", value)
    }

    pub fn sort(mut self, value: impl Into<String>) -> Self {
        self.params.push(("sort".to_string(), value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.params)
    }

    fn set(&mut self, key: String, value: String) {
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for RequestOptions
where
    K: Into<String>,
    V: ToString,
{
    fn from(args: [(K, V); N]) -> Self {
        args.into_iter()
            .fold(Self::new(), |options, (k, v)| options.param(k, v))
    }
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

impl From<Search> for RequestOptions {
    fn from(search: Search) -> Self {
        let mut options = Self::new().param("query", search.query);
        if let Some(page) = search.page {
            options = options.page(page);
        }
        if let Some(size) = search.size {
            options = options.size(size);
        }
        search.sort.into_iter()
            .fold(options, |options, sort| options.sort(sort))
    }
}

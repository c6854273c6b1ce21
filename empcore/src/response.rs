use http::{
    HeaderMap,
    StatusCode,
};

/// The outcome of a successful request: the status metadata of the
/// response together with its body, if it had one.
#[derive(Clone, Debug)]
pub struct EntityResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<T>,
}

/// A notification the server attached to a response, through the
/// `X-<application>-alert` and `X-<application>-params` headers.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityAlert {
    pub message: String,
    pub param: Option<String>,
}

impl<T> EntityResponse<T> {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Option<T>) -> Self {
        Self { status, headers, body }
    }

    /// A `200 OK` response with no headers.
    pub fn ok(body: Option<T>) -> Self {
        Self::new(StatusCode::OK, HeaderMap::new(), body)
    }

    pub fn into_body(self) -> Option<T> {
        self.body
    }

    pub fn map<U, F>(self, f: F) -> EntityResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        EntityResponse {
            status: self.status,
            headers: self.headers,
            body: self.body.map(f),
        }
    }

    pub fn alert(&self) -> Option<EntityAlert> {
        let (name, value) = self.headers.iter()
            .find(|(name, _)| name.as_str().ends_with("-alert"))?;
        let message = value.to_str().ok()?.to_string();
        let prefix = name.as_str().strip_suffix("-alert")?;
        let param = self.headers.get(format!("{prefix}-params"))
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Some(EntityAlert { message, param })
    }
}

#[cfg(test)]
mod test {
    use http::HeaderValue;
    use super::*;

    #[test]
    fn alert_with_params() {
        let mut headers = HeaderMap::new();
        headers.insert("x-employeeapp-alert", HeaderValue::from_static(
            "employeeApp.vacation.created"));
        headers.insert("x-employeeapp-params", HeaderValue::from_static("1"));
        headers.insert("link", HeaderValue::from_static("link;link"));
        let response = EntityResponse::new(StatusCode::CREATED, headers, Some(()));
        assert_eq!(response.alert(), Some(EntityAlert {
            message: "employeeApp.vacation.created".to_string(),
            param: Some("1".to_string()),
        }));
    }

    #[test]
    fn no_alert() {
        let response = EntityResponse::ok(Some(1));
        assert_eq!(response.alert(), None);
        assert_eq!(response.map(|v| v + 1).into_body(), Some(2));
    }
}

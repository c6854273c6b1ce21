use empcore::{
    entity::Entity,
    navigation::{
        CloseReason,
        ModalService,
    },
    request::{
        RequestOptions,
        Search,
    },
    service::EntityService,
};
use std::sync::Arc;

use crate::route::RouteParams;

/// Lists the entities, optionally filtered by a search term.
pub struct ListComponent<E, S, M> {
    pub entities: Option<Vec<E>>,
    pub is_loading: bool,
    pub current_search: String,
    service: Arc<S>,
    modal_service: Arc<M>,
}

impl<E, S, M> ListComponent<E, S, M>
where
    E: Entity,
    S: EntityService<E>,
    M: ModalService<E>,
{
    /// The initial search term is taken from the `search` query
    /// parameter of the current location.
    pub fn new(service: Arc<S>, modal_service: Arc<M>, query_params: &RouteParams) -> Self {
        Self {
            entities: None,
            is_loading: false,
            current_search: query_params.get("search")
                .unwrap_or_default()
                .to_string(),
            service,
            modal_service,
        }
    }

    pub async fn init(&mut self) {
        self.load_all().await
    }

    pub async fn load_all(&mut self) {
        self.is_loading = true;
        let result = if self.current_search.is_empty() {
            self.service.query(RequestOptions::new()).await
        } else {
            self.service.search(Search::new(self.current_search.clone())).await
        };
        self.is_loading = false;
        match result {
            Ok(response) => self.entities = Some(response.into_body().unwrap_or_default()),
            Err(e) => log::warn!("failed to load {}: {e}", E::RESOURCE),
        }
    }

    pub async fn search(&mut self, query: impl Into<String>) {
        self.current_search = query.into();
        self.load_all().await
    }

    pub fn track_id(&self, entity: &E) -> Option<i64> {
        entity.id()
    }

    /// Asks for confirmation through the delete dialog; the list is only
    /// reloaded if the entity was actually deleted.
    pub async fn delete(&mut self, entity: E) {
        match self.modal_service.open_delete_dialog(entity).await {
            CloseReason::Deleted => self.load_all().await,
            CloseReason::Dismissed => (),
        }
    }
}

#[cfg(test)]
mod test {
    use empcore::{
        country::Country,
        error::ServiceError,
        response::EntityResponse,
        vacation::Vacation,
    };
    use http::{
        HeaderMap,
        HeaderValue,
        StatusCode,
    };
    use mockall::Sequence;
    use test_emp::core::{
        MockCountryModal,
        MockCountryService,
        MockVacationModal,
        MockVacationService,
    };
    use super::*;

    fn vacation(id: i64) -> Vacation {
        Vacation { id: Some(id), ..Default::default() }
    }

    #[async_std::test]
    async fn load_all_on_init() {
        let mut service = MockCountryService::new();
        service.expect_query()
            .times(1)
            .withf(|options| options.is_empty())
            .returning(|_| {
                let mut headers = HeaderMap::new();
                headers.insert("link", HeaderValue::from_static("link;link"));
                Ok(EntityResponse::new(StatusCode::OK, headers, Some(vec![
                    Country { id: Some(123), country_name: None },
                ])))
            });
        service.expect_search().never();

        let mut comp = ListComponent::new(
            Arc::new(service),
            Arc::new(MockCountryModal::new()),
            &RouteParams::new(),
        );
        // the mocked query resolves on first poll, so the in-flight flag
        // is only observable around the call
        assert!(!comp.is_loading);
        assert!(comp.entities.is_none());
        comp.init().await;
        assert!(!comp.is_loading);
        assert_eq!(comp.entities.as_ref().map(Vec::len), Some(1));
        assert_eq!(comp.entities.as_ref().and_then(|c| c[0].id), Some(123));
    }

    #[async_std::test]
    async fn search_from_query_params() {
        let mut service = MockVacationService::new();
        service.expect_query().never();
        service.expect_search()
            .times(1)
            .withf(|search| search.query == "startDate:[2021-01-01 TO *]")
            .returning(|_| Ok(EntityResponse::ok(Some(vec![vacation(1), vacation(2)]))));

        let mut comp = ListComponent::new(
            Arc::new(service),
            Arc::new(MockVacationModal::new()),
            &RouteParams::from([("search", "startDate:[2021-01-01 TO *]")]),
        );
        assert_eq!(comp.current_search, "startDate:[2021-01-01 TO *]");
        comp.init().await;
        assert_eq!(comp.entities, Some(vec![vacation(1), vacation(2)]));
    }

    #[async_std::test]
    async fn search_then_clear() {
        let mut seq = Sequence::new();
        let mut service = MockVacationService::new();
        service.expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|search| search.query == "42")
            .returning(|_| Ok(EntityResponse::ok(Some(vec![vacation(42)]))));
        service.expect_query()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(EntityResponse::ok(Some(vec![vacation(1), vacation(42)]))));

        let mut comp = ListComponent::new(
            Arc::new(service),
            Arc::new(MockVacationModal::new()),
            &RouteParams::new(),
        );
        comp.search("42").await;
        assert_eq!(comp.current_search, "42");
        assert_eq!(comp.entities, Some(vec![vacation(42)]));
        comp.search("").await;
        assert_eq!(comp.entities, Some(vec![vacation(1), vacation(42)]));
    }

    #[async_std::test]
    async fn missing_body_is_empty() {
        let mut service = MockVacationService::new();
        service.expect_query()
            .times(1)
            .returning(|_| Ok(EntityResponse::ok(None)));

        let mut comp = ListComponent::new(
            Arc::new(service),
            Arc::new(MockVacationModal::new()),
            &RouteParams::new(),
        );
        comp.load_all().await;
        assert_eq!(comp.entities, Some(vec![]));
    }

    #[async_std::test]
    async fn failure_keeps_previous() {
        let mut seq = Sequence::new();
        let mut service = MockVacationService::new();
        service.expect_query()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(EntityResponse::ok(Some(vec![vacation(1)]))));
        service.expect_query()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ServiceError::Status(StatusCode::SERVICE_UNAVAILABLE)));

        let mut comp = ListComponent::new(
            Arc::new(service),
            Arc::new(MockVacationModal::new()),
            &RouteParams::new(),
        );
        comp.load_all().await;
        comp.load_all().await;
        assert!(!comp.is_loading);
        assert_eq!(comp.entities, Some(vec![vacation(1)]));
    }

    #[async_std::test]
    async fn delete_reloads_when_deleted() {
        let mut service = MockVacationService::new();
        service.expect_query()
            .times(1)
            .returning(|_| Ok(EntityResponse::ok(Some(vec![]))));
        let mut modal = MockVacationModal::new();
        modal.expect_open_delete_dialog()
            .times(1)
            .withf(|entity| entity.id == Some(1))
            .returning(|_| CloseReason::Deleted);

        let mut comp = ListComponent::new(
            Arc::new(service),
            Arc::new(modal),
            &RouteParams::new(),
        );
        comp.delete(vacation(1)).await;
        assert_eq!(comp.entities, Some(vec![]));
    }

    #[async_std::test]
    async fn delete_dismissed() {
        let mut service = MockVacationService::new();
        service.expect_query().never();
        let mut modal = MockVacationModal::new();
        modal.expect_open_delete_dialog()
            .times(1)
            .returning(|_| CloseReason::Dismissed);

        let mut comp = ListComponent::new(
            Arc::new(service),
            Arc::new(modal),
            &RouteParams::new(),
        );
        comp.delete(vacation(1)).await;
        assert_eq!(comp.entities, None);
        assert_eq!(comp.track_id(&vacation(7)), Some(7));
    }
}

use async_trait::async_trait;
use mockall::mock;
use empcore::{
    country::Country,
    error::ServiceError,
    navigation::{
        ActiveModal,
        CloseReason,
        ModalService,
        Navigator,
    },
    request::{
        RequestOptions,
        Search,
    },
    response::EntityResponse,
    service::EntityService,
    vacation::Vacation,
};

mock! {
    pub VacationService {}

    #[async_trait]
    impl EntityService<Vacation> for VacationService {
        async fn create(&self, entity: Vacation)
            -> Result<EntityResponse<Vacation>, ServiceError>;
        async fn update(&self, entity: Vacation)
            -> Result<EntityResponse<Vacation>, ServiceError>;
        async fn partial_update(&self, entity: Vacation)
            -> Result<EntityResponse<Vacation>, ServiceError>;
        async fn find(&self, id: i64)
            -> Result<EntityResponse<Vacation>, ServiceError>;
        async fn query(&self, options: RequestOptions)
            -> Result<EntityResponse<Vec<Vacation>>, ServiceError>;
        async fn delete(&self, id: i64)
            -> Result<EntityResponse<()>, ServiceError>;
        async fn search(&self, search: Search)
            -> Result<EntityResponse<Vec<Vacation>>, ServiceError>;
    }
}

mock! {
    pub CountryService {}

    #[async_trait]
    impl EntityService<Country> for CountryService {
        async fn create(&self, entity: Country)
            -> Result<EntityResponse<Country>, ServiceError>;
        async fn update(&self, entity: Country)
            -> Result<EntityResponse<Country>, ServiceError>;
        async fn partial_update(&self, entity: Country)
            -> Result<EntityResponse<Country>, ServiceError>;
        async fn find(&self, id: i64)
            -> Result<EntityResponse<Country>, ServiceError>;
        async fn query(&self, options: RequestOptions)
            -> Result<EntityResponse<Vec<Country>>, ServiceError>;
        async fn delete(&self, id: i64)
            -> Result<EntityResponse<()>, ServiceError>;
        async fn search(&self, search: Search)
            -> Result<EntityResponse<Vec<Country>>, ServiceError>;
    }
}

mock! {
    pub Navigator {}

    impl Navigator for Navigator {
        fn navigate(&self, commands: Vec<String>);
        fn previous_state(&self);
    }
}

mock! {
    pub VacationModal {}

    #[async_trait]
    impl ModalService<Vacation> for VacationModal {
        async fn open_delete_dialog(&self, entity: Vacation) -> CloseReason;
    }
}

mock! {
    pub CountryModal {}

    #[async_trait]
    impl ModalService<Country> for CountryModal {
        async fn open_delete_dialog(&self, entity: Country) -> CloseReason;
    }
}

mock! {
    pub ActiveModal {}

    impl ActiveModal for ActiveModal {
        fn close(&self, reason: CloseReason);
        fn dismiss(&self);
    }
}

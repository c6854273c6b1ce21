use empcore::{
    entity::Entity,
    navigation::Navigator,
};
use std::sync::Arc;

/// Displays a resolved entity.
pub struct DetailComponent<E, N> {
    pub entity: Option<E>,
    navigator: Arc<N>,
}

impl<E: Entity, N: Navigator> DetailComponent<E, N> {
    pub fn new(navigator: Arc<N>) -> Self {
        Self {
            entity: None,
            navigator,
        }
    }

    pub fn init(&mut self, entity: E) {
        self.entity = Some(entity);
    }

    pub fn previous_state(&self) {
        self.navigator.previous_state();
    }
}

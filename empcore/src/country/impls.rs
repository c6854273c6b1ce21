use crate::{
    country::Country,
    entity::{
        Entity,
        RestEntity,
    },
};

impl Country {
    pub fn new(id: Option<i64>, country_name: Option<String>) -> Self {
        Self { id, country_name }
    }
}

impl Entity for Country {
    const RESOURCE: &'static str = "countries";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

// no date-like fields, so the model doubles as its own wire form.
impl RestEntity for Country {
    type Wire = Country;

    fn to_wire(&self) -> Country {
        self.clone()
    }

    fn from_wire(wire: Country) -> Self {
        wire
    }
}

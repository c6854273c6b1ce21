use chrono::{DateTime, Utc};
use crate::{
    entity::{
        datetime,
        Entity,
        RestEntity,
    },
    vacation::{
        Vacation,
        VacationWire,
    },
};

impl Vacation {
    pub fn new(
        id: Option<i64>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self { id, start_date, end_date }
    }
}

impl Entity for Vacation {
    const RESOURCE: &'static str = "vacations";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn apply_defaults(&mut self, today: DateTime<Utc>) {
        self.start_date = Some(today);
        self.end_date = Some(today);
    }
}

impl RestEntity for Vacation {
    type Wire = VacationWire;

    fn to_wire(&self) -> VacationWire {
        VacationWire {
            id: self.id,
            start_date: datetime::to_wire(self.start_date.as_ref()),
            end_date: datetime::to_wire(self.end_date.as_ref()),
        }
    }

    fn from_wire(wire: VacationWire) -> Self {
        Self {
            id: wire.id,
            start_date: datetime::from_wire(wire.start_date.as_deref()),
            end_date: datetime::from_wire(wire.end_date.as_deref()),
        }
    }
}

impl From<VacationWire> for Vacation {
    fn from(wire: VacationWire) -> Self {
        Self::from_wire(wire)
    }
}

impl From<&Vacation> for VacationWire {
    fn from(vacation: &Vacation) -> Self {
        vacation.to_wire()
    }
}

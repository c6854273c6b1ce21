use empcore::vacation::Vacation;

use crate::{
    delete::DeleteDialog,
    detail::DetailComponent,
    form::{
        format_date_time,
        parse_date_time,
        EntityForm,
    },
    list::ListComponent,
    resolve::EntityResolver,
    update::UpdateComponent,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VacationForm {
    pub id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl EntityForm<Vacation> for VacationForm {
    fn update_form(&mut self, vacation: &Vacation) {
        self.id = vacation.id;
        self.start_date = vacation.start_date.as_ref().map(format_date_time);
        self.end_date = vacation.end_date.as_ref().map(format_date_time);
    }

    fn create_from_form(&self) -> Vacation {
        Vacation {
            id: self.id,
            start_date: self.start_date.as_deref().and_then(parse_date_time),
            end_date: self.end_date.as_deref().and_then(parse_date_time),
        }
    }
}

pub type VacationComponent<S, M> = ListComponent<Vacation, S, M>;
pub type VacationDetailComponent<N> = DetailComponent<Vacation, N>;
pub type VacationUpdateComponent<S, N> = UpdateComponent<Vacation, VacationForm, S, N>;
pub type VacationDeleteDialog<S, M> = DeleteDialog<Vacation, S, M>;
pub type VacationResolver<S, N> = EntityResolver<Vacation, S, N>;

use empcore::country::Country;

use crate::{
    delete::DeleteDialog,
    detail::DetailComponent,
    form::EntityForm,
    list::ListComponent,
    resolve::EntityResolver,
    update::UpdateComponent,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountryForm {
    pub id: Option<i64>,
    pub country_name: Option<String>,
}

impl EntityForm<Country> for CountryForm {
    fn update_form(&mut self, country: &Country) {
        self.id = country.id;
        self.country_name = country.country_name.clone();
    }

    fn create_from_form(&self) -> Country {
        Country {
            id: self.id,
            country_name: self.country_name.clone(),
        }
    }
}

pub type CountryComponent<S, M> = ListComponent<Country, S, M>;
pub type CountryDetailComponent<N> = DetailComponent<Country, N>;
pub type CountryUpdateComponent<S, N> = UpdateComponent<Country, CountryForm, S, N>;
pub type CountryDeleteDialog<S, M> = DeleteDialog<Country, S, M>;
pub type CountryResolver<S, N> = EntityResolver<Country, S, N>;

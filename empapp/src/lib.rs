pub mod country;
pub mod delete;
pub mod detail;
pub mod form;
pub mod list;
pub mod resolve;
pub mod route;
pub mod update;
pub mod vacation;

pub(crate) mod chrono {
    pub use ::chrono::*;
    #[cfg(test)]
    pub use test_emp::chrono::Utc;
}

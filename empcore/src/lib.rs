pub mod collection;
pub mod country;
pub mod entity;
pub mod error;
pub mod navigation;
pub mod request;
pub mod response;
pub mod service;
pub mod vacation;

pub mod builder;
pub mod config;
pub mod error;
pub mod platform;
pub mod resource;

pub use builder::Builder;
pub use platform::Platform;
pub use resource::EntityResource;

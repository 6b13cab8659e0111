mod dashboard;
mod error;
mod login;
mod member;

pub mod dtos {
    pub use crate::login::dtos::*;
    pub use crate::member::dtos::*;
}

pub use crate::dashboard::api::*;
pub use crate::error::api::*;
pub use crate::login::api::*;
pub use crate::member::api::*;

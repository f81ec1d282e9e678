mod customer;
mod group;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::customer::dtos::*;
    pub use crate::group::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::customer::api::*;
pub use crate::group::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;

mod booking;
mod pet;
mod reward;
mod shared;
mod status;

pub use crate::booking::api::*;
pub use crate::pet::api::*;
pub use crate::reward::api::*;
pub use crate::shared::api::*;
pub use crate::shared::Response;
pub use crate::status::api::*;

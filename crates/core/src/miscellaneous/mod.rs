mod miscellaneous_model;
mod miscellaneous_service;
mod miscellaneous_traits;

pub use miscellaneous_model::{Miscellaneous, NewMiscellaneous};
pub use miscellaneous_service::MiscellaneousService;
pub use miscellaneous_traits::{MiscellaneousRepositoryTrait, MiscellaneousServiceTrait};

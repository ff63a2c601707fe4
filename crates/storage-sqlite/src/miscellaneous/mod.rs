mod model;
mod repository;

pub use model::{MiscellaneousRow, NewMiscellaneousRow};
pub use repository::MiscellaneousRepository;

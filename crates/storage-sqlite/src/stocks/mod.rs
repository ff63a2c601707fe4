mod model;
mod repository;

pub use model::{NewStockRow, StockRow};
pub use repository::StockRepository;

pub mod orders;
pub mod products;

pub use orders::OrderPage;
pub use products::ProductPage;

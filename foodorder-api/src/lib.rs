pub mod client;
pub mod error;
pub mod models;

pub use client::{HttpOrderApi, OrderApi};
pub use error::ApiError;
pub use models::{FoodName, FoodType, Order, OrderDraft, FOOD_PRICES};

//! Shopcart Domain Concerns

pub mod carts;
pub mod checkout;
pub mod items;
pub mod orders;
pub mod users;

pub mod app_products;
pub mod products_list;
pub mod products_state;

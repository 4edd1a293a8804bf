pub mod client;
pub mod dto;
pub mod envelope;
pub mod product_gateway;

pub mod auth;
pub mod calculator;
pub mod fuel_prices;
pub mod settings;
pub mod tolls;
pub mod trips;

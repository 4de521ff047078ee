pub mod promotion_use_cases;
pub mod ports;
pub mod service;

pub mod mentor_use_cases;
pub mod ports;
pub mod service;

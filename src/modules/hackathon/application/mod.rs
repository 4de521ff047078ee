pub mod hackathon_use_cases;
pub mod ports;
pub mod service;

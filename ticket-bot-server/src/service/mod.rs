pub mod id_generator;
pub mod notifications_service;
pub mod tickets_service;

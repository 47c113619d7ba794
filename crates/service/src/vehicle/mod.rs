//! Vehicle module: three-layer architecture (domain, repository, service).
//!
//! Registration, top-up and balance lookup live here, independent of the web framework.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::VehicleService;

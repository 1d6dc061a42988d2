pub mod errors;
pub mod upstream_repository;

pub mod upstream_repository_errors;

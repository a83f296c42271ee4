pub mod dto;
pub mod error_mapper;
pub mod routes;
pub mod upload;

//! Ports - interfaces the services depend on

pub mod catalog;

pub use catalog::Catalog;

//! Domain layer: package catalog, build history, and the pure services that
//! turn them into version matrices and dependency trees.
pub mod domain;
pub mod services;

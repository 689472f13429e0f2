//! # moviedb-entity
//!
//! Domain entity models. Every struct in this crate represents a database
//! table row or a value object written to one. Row types additionally
//! derive `sqlx::FromRow`.

pub mod user;

//! Model to entity mappers
//!
//! This module provides conversions from database models to domain entities
//! (banner-core). Entity → column values for inserts and updates are bound
//! directly in the repositories since the value objects expose `as_str`.

mod admin;
mod banner;

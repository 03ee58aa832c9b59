//! Core data model for the media rental catalog.
//!
//! This crate defines the catalog entries (movies and series), rental
//! records, and the customer collaborator trait, without any I/O. Loading,
//! searching, and borrow/return bookkeeping live in `medialoan-catalog`.

pub mod content;
pub mod customer;
pub mod rental;

pub use content::{ContentItem, ContentKind};
pub use customer::{Customer, Member};
pub use rental::Rental;

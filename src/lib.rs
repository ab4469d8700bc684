//! Core catalog logic for the Marani winemaking-equipment marketplace.
//!
//! This crate exposes the domain model, backend DTO decoding, search forms,
//! configuration and service layers used by the marketplace front end.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod services;

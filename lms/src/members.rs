use crate::core::domain::Identifiable;

pub mod command;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

pub(crate) trait Member: Identifiable {
    fn name(&self) -> &str;
    fn has_borrowed(&self, isbn: &str) -> bool;
}

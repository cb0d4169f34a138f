use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn isbn(&self) -> &str;
    fn available_copies(&self) -> i32;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}
pub mod catalog;
pub mod checkout;
pub mod console;
pub mod core {
    pub mod circulation;
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}
pub mod gateway;
pub mod members;
pub mod utils {
    pub mod date;
    pub mod logs;
}

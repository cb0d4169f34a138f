pub mod menu;
pub mod prompt;
pub mod view;

pub mod command;
pub mod image;
pub mod prompt;
pub mod render;
pub mod session;

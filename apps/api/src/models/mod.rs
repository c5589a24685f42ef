pub mod content;
pub mod settings;

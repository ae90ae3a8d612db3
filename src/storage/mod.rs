pub mod errors;
pub mod gradient_preset;
pub mod settings;

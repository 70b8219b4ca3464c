// Service module exports

pub mod event;
pub mod prompt;
pub mod settings;

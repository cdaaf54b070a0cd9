pub mod conversion;
pub mod webhook;

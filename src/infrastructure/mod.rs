pub mod http;
pub mod mediaconvert;
pub mod queue;

pub mod math;
pub mod response;
pub mod time;

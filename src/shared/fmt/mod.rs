//! Display formatting for rates and observation times.

pub mod num;
pub mod time;

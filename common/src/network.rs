pub mod expansion;
pub mod port;
pub mod range;

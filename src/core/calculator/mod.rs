pub mod aggregate;
pub mod grouping;
pub mod ranking;
pub mod target;

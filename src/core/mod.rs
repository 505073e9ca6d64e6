pub mod calculator;
pub mod config;
pub mod logic;
pub mod normalizer;
pub mod settings;

mod common;

pub mod api;
pub mod config;
pub mod data_model;
pub mod flows;
pub mod probe;
pub mod probe_engine;
pub mod report;
pub mod settings;

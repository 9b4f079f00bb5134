//! Headless driver that stands in for a live window

pub mod app;
pub mod script;

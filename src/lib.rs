//! Interactive least-squares polynomial fitting
//!
//! Points are placed, dragged and removed on a canvas; every change refits a
//! polynomial of fixed degree through them. Rendering and input are kept
//! behind small seams so the core can be driven headless.

pub mod config;
pub mod core;
pub mod domain;
pub mod regression;
pub mod render;
pub mod session;

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod catalog;
pub mod layout;
pub mod rank;
pub mod reconcile;
pub mod scrape;

pub mod file;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

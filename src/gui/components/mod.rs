// src/gui/components/mod.rs
pub mod action_bar;
pub mod controls;
pub mod grid_preview;
pub mod ranking_table;

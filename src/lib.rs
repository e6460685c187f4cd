// src/lib.rs — Library root for mmbar

pub mod cli;
pub mod core;
pub mod infra;
pub mod widgets;

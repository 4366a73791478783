//! Backend side of the GUI: command definitions and the worker runtime.

pub mod commands;
pub mod runtime;

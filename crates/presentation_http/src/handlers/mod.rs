//! HTTP request handlers

pub mod commands;
pub mod health;
pub mod map;
pub mod panel;
pub mod robot;
pub mod status;

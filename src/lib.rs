pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod event;
pub mod transcript;
pub mod ui;

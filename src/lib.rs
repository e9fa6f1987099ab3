#![warn(missing_docs)]
//! A feedback widget and the relay that forwards its messages to a Telegram
//! chat.

pub mod cmd;
pub mod config;
pub mod http_client;
pub mod http_server;
pub mod metadata;
pub mod models;
pub mod notification;
pub mod widget;

pub mod catalog;
pub mod chat;
pub mod config;
pub mod pay;

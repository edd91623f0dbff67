pub mod actors;
pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod github;
pub mod models;
pub mod navbar;
pub mod page;
pub mod render;
pub mod scroll;
pub mod server;
pub mod types;
pub mod typing;

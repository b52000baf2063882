//! Futénote Desktop Application
//!
//! A small note-taking app: a sidebar of notes, a note detail page and a top
//! navigation bar over an in-memory note store.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod router;
mod state;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("futenote=debug".parse().expect("valid log directive")),
        )
        .init();

    tracing::info!("Starting Futénote...");

    let app_config = config::app_config();
    let window = WindowBuilder::new()
        .with_title(app_config.brand.clone())
        .with_resizable(true);

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}

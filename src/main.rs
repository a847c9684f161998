#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod pages;
mod sections;
mod theme;

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting portfolio");

    dioxus::LaunchBuilder::web().launch(app::App);
}

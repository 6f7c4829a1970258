pub mod components;
pub mod config;
pub mod demo;
pub mod navigation;
pub mod route;
pub mod views;

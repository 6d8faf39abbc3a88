pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod icons;
pub mod markup;
pub mod notification_service;
pub mod session;
pub mod transcript;

pub mod app_state;
pub mod completion_client;
pub mod configuration;
pub mod dataset;
pub mod domain;
pub mod question;
pub mod routes;
pub mod session;
pub mod speaker;
pub mod speech_client;
pub mod startup;
pub mod telemetry;
pub mod translations;
pub mod user_registry;
pub mod utils;

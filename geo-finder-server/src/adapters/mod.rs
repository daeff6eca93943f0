pub mod app_state;
pub mod http;
pub mod lookup_api;
pub mod page;

pub mod client;
pub mod errors;
pub mod types;
pub mod utils;

pub use client::GeoClient;
pub use errors::{ClientError, LookupError, LookupErrorKind};
pub use types::{Config, GeolocationRecord};

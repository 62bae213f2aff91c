mod client;
mod error;
mod reading;

pub use client::Client;
pub use error::Error;
pub use reading::Reading;

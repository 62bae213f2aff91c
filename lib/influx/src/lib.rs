mod client;
mod error;
mod line;
mod point;

pub use client::Client;
pub use error::Error;
pub use point::Point;

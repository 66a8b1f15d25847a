mod client;
mod helpers;

pub use client::CurlTransport;

mod client;

pub use client::{Exchange, HttpClient, Transport};

//! iTunes Search API provider

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::ItunesClient;

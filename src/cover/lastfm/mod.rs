//! Last.fm album.getinfo provider

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::LastfmClient;

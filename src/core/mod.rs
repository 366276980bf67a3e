// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::Element;
pub use net::Http;

//! Client side of the WordPress REST API (`/wp-json/wp/v2/`): collection
//! URLs, page decoding, per-item extraction and the pagination walk.

pub mod client;
pub mod content;
pub mod decode;
pub mod error;
pub mod extract;
pub mod filter;
pub mod pager;

pub use client::{PageFetcher, WpClient, WpClientConfig};
pub use content::{ContentType, Record};

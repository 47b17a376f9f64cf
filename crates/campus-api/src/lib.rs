//! # campus-api
//!
//! HTTP access to the campus assistant backend:
//! - `POST /api/chat` through the [`ChatTransport`] trait
//! - the read-only `/api/events`, `/api/facilities` and `/api/bookings` views
//!   through [`CatalogClient`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use campus_api::{ApiConfig, ChatTransport, ClientFactory};
//! use campus_logging::RequestLogger;
//! use campus_types::ChatRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ApiConfig::new("http://localhost:8000")?;
//!     let clients = ClientFactory::create(&config, RequestLogger::new(false))?;
//!
//!     let reply = clients
//!         .chat
//!         .send(&ChatRequest::new("What events are happening?", None))
//!         .await?;
//!     println!("{}", reply.display_text());
//!
//!     for event in clients.catalog.events().await? {
//!         println!("{} on {}", event.name, event.date);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;


pub use client::{CatalogClient, ChatTransport, HttpChatTransport};
pub use config::{
    normalize_base_url,
    resolve_base_url,
    ApiConfig,
    ClientFactory,
    ApiClients,
    BOOKINGS_PATH,
    CHAT_PATH,
    EVENTS_PATH,
    FACILITIES_PATH,
};
pub use error::ApiError;

//! # API crate: client for the school content service
//!
//! Everything the frontends need to talk to the remote content API lives here:
//! the request boundary, the data model it carries, and the static registry of
//! managed collections.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one request per call, JSON in/out, credential header when supplied |
//! | [`config`] | [`ApiConfig`]: base address and request timeout from the environment |
//! | [`error`] | [`ApiError`]: remote, transport and decode failures |
//! | [`models`] | [`Collection`] registry, schema-free [`Record`], [`ProfilePage`] keys |
//! | [`transport`] | [`Transport`] trait, [`HttpTransport`] (reqwest) and [`RecordingTransport`] (scripted) |
//!
//! ## Remote endpoints
//!
//! | Method | Path | Credential |
//! |--------|------|------------|
//! | `POST` | `/auth/login` | none |
//! | `POST` | `/auth/logout` | required |
//! | `GET` | `/public/{collection}[?limit=N]` | none |
//! | `GET` | `/public/page/{key}` | none |
//! | `GET` | `/admin/{collection}` | required |
//! | `POST` | `/admin/{collection}` | required |
//! | `PUT` | `/admin/{collection}/{id}` | required |
//! | `DELETE` | `/admin/{collection}/{id}` | required |
//!
//! Admin calls take a `&Credential` rather than an `Option`, so they cannot be
//! issued without one.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{ApiClient, CREDENTIAL_HEADER};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Collection, Field, ProfilePage, Record, RecordId};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, RecordingTransport, Transport};

pub use store::Credential;

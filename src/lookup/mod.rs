//! Profile lookup against the remote user directory.
//!
//! ```text
//! UserLookupService ──→ Transport ──→ HTTP GET <base>/<username>
//!        │
//!        └── LookupError | UserRecord
//! ```

pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod user;

pub use error::LookupError;
pub use http::ReqwestTransport;
pub use service::{user_url, UserLookupService};
pub use transport::{Transport, TransportError, TransportResponse};
pub use user::UserRecord;

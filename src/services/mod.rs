//! Service layer: the certificate cache and per-call request contexts.

pub mod certificate_cache;
pub mod request_context;

pub use certificate_cache::{CertificateCache, IndexState};
pub use request_context::RequestContext;

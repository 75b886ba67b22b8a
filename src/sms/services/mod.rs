//! Application services for the shared modem link.

mod link;

pub use link::{ModemLinkService, ModemLinkServiceError, ModemLinkServiceResult};

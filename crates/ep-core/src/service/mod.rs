//! Service definition: fixed on-disk layout, credential material and the
//! text of every file rendered for the proxied service.

mod credentials;
mod layout;
pub mod templates;

pub use credentials::{ClientCredentials, CredentialPaths};
pub use layout::{ServiceLayout, FALLBACK_PACKAGES, REQUIRED_ARTIFACTS};

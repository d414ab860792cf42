//! Routed pages.

mod owners;
mod secrets;
mod spn_new;
mod spns;

pub use owners::OwnersPage;
pub use secrets::SecretsPage;
pub use spn_new::SpnCreatePage;
pub use spns::SpnListPage;

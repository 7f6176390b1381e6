// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition, documentation and liveness endpoints.

pub mod docs;
pub mod health;
pub mod login;

pub use docs::{api_docs, api_docs_yaml};
pub use health::{health, root};
pub use login::login;

pub mod docs;

pub use docs::ApiDoc;

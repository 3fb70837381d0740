//! URL handling: canonicalization and raw-href link classification

mod classify;
mod normalize;

pub use classify::{classify_href, LinkKind};
pub use normalize::normalize_url;

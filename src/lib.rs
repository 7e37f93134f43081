//! O.A.S.I.S. orbital tracking library.
//!
//! The dashboard's globe view plots catalog objects at positions computed
//! from their Keplerian elements. The solver, the catalog pipeline that
//! drives it, and the export formats live in separate crates; this façade
//! re-exports them so binaries and tests share one entry point.

pub use oasis_catalog as catalog;
pub use oasis_config as config;
pub use oasis_core::{angles, constants, vector};
pub use oasis_export as export;
pub use oasis_orbits as orbits;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

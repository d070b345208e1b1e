//! Cryptex manager commands built on the engine.
//!
//! Modules resolve their arguments into [`DeviceRequest`] documents printed
//! as JSON; the device side (mounting, TSS signing, trust cache encoding)
//! consumes them.

mod catalog;
mod error;
mod requests;

pub use catalog::cryptex_catalog;
pub use error::{CryptexError, describe_error};
pub use requests::{DeviceRequest, FileInfo, TrustCacheSource};

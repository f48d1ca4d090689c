//! Error handling for folio.
//!
//! - **Error Categories**: classification used for status-line messaging
//! - **Unified Error Type**: `FolioError` covers content loading, outbound
//!   actions (browser, clipboard, resume download) and terminal I/O
//! - **Result Type Alias**: `FolioResult<T>`
//!
//! The binary wraps everything in `color_eyre::Result` at the edge.

mod category;
mod folio_error;
mod result;

pub use category::ErrorCategory;
pub use folio_error::FolioError;
pub use result::FolioResult;

//! Quote collection state: the ordered store with its like flags, the
//! selection cursor shown on the home screen, and the add/edit session.
//!
//! Quotes are identified by position only. Deleting index `k` shifts every
//! later quote down by one, and neither the like map nor the cursor is
//! re-keyed when that happens.

pub mod cursor;
pub mod error;
pub mod session;
pub mod store;
pub mod timer;

pub use cursor::{SelectionCursor, Transition};
pub use error::QuoteError;
pub use session::{Committed, EditSession};
pub use store::{Quote, QuoteStore};

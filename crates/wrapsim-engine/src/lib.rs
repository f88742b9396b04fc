//! The action state-transition engine.
//!
//! [`apply`] is the single entry point: given a state, a robot, and an
//! action, it returns the successor state or an error — pure, total over the
//! legal-action space, and free of partial application. [`initialize`]
//! performs the first wrap of a freshly constructed state, and the
//! [`legality`] module answers "what may this robot do right now" for
//! external strategies without touching state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod apply;
pub mod legality;
mod wrap;

pub use apply::{apply, initialize};
pub use legality::{is_legal, legal_actions};

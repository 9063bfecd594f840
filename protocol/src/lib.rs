//! Wire messages between the board engine and the layers around it.
//!
//! The input layer sends [`Command`]s, a [`Session`] applies them to its grid, and the rendering
//! layer receives the resulting [`Event`]s. Both message types are line-oriented JSON.

pub use command::*;
pub use event::*;
pub use session::*;

mod command;
mod event;
mod session;

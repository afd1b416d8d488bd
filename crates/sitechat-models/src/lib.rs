#![deny(missing_docs)]

//! # sitechat models
//!
//! Plain data types shared by the widget, the stream client and the
//! development endpoint.
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`message`] | Chat messages and their [`Origin`] |
//! | [`question`] | The `POST /question_on_url` request body |
//! | [`error`] | [`ModelError`] for fallible constructors |

pub mod error;
pub mod message;
pub mod question;

pub use error::*;
pub use message::*;
pub use question::*;

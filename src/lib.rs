//! seqpipe - composable asynchronous sequence combinators
//!
//! A sequence ([`Seq`]) is a single-pass, pull-based asynchronous producer
//! of fallible items. This crate provides lazy transformations (map, filter,
//! take, skip, peek, flatten), sequential and racing composition ([`chain()`],
//! [`combine()`]), terminal consumers (for_each, collect, fold, find, join),
//! and [`Pipe`], a fluent handle whose chaining methods consume `self` so
//! that a spent cursor can never be pulled twice.

pub mod combine;
pub mod consume;
pub mod error;
pub mod input;
pub mod pipe;
pub mod seq;
pub mod seq_ext;

pub use combine::{combine, combine_deferred};
pub use consume::{collect, find, first, fold, for_each, join};
pub use error::{SeqError, SeqResult};
pub use input::{flatten, Input};
pub use pipe::{pipe, Pipe};
pub use seq::*;
pub use seq_ext::{IntoSeq, SeqExt};

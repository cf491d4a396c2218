//! Extension traits for method-syntax composition.
//!
//! [`IntoSeq`] lifts any plain `Stream` into the fallible sequence world;
//! [`SeqExt`] provides `_seq`-suffixed combinator methods on any stream
//! that already carries `SeqResult` items.

use futures_core::Stream;
use futures_util::stream::StreamExt;
use std::future::Future;

use crate::error::SeqResult;
use crate::pipe::Pipe;
use crate::seq::{self, Seq};

/// Lift an infallible stream into a [`Seq`] or a [`Pipe`]
pub trait IntoSeq: Stream + Sized + Send + 'static {
    /// Box the stream and wrap every item in `Ok`
    fn into_seq(self) -> Seq<Self::Item>
    where
        Self::Item: Send + 'static,
    {
        self.map(Ok).boxed()
    }

    /// Lift into a fluent [`Pipe`] handle
    fn into_pipe(self) -> Pipe<Self::Item>
    where
        Self::Item: Send + 'static,
    {
        Pipe::new(self.into_seq())
    }
}

impl<S> IntoSeq for S where S: Stream + Sized + Send + 'static {}

/// Method syntax for the free combinators, on any stream of fallible items
pub trait SeqExt<T>: Stream<Item = SeqResult<T>> + Sized + Send + 'static
where
    T: Send + 'static,
{
    fn enumerate_seq(self) -> Seq<(T, usize)> {
        seq::enumerate(self.boxed())
    }

    fn map_seq<U, F, Fut>(self, f: F) -> Seq<U>
    where
        U: Send + 'static,
        F: FnMut(T, usize) -> Fut + Send + 'static,
        Fut: Future<Output = SeqResult<U>> + Send + 'static,
    {
        seq::map(self.boxed(), f)
    }

    fn filter_seq<F, Fut>(self, pred: F) -> Seq<T>
    where
        F: FnMut(&T, usize) -> Fut + Send + 'static,
        Fut: Future<Output = SeqResult<bool>> + Send + 'static,
    {
        seq::filter(self.boxed(), pred)
    }

    fn take_seq(self, n: usize) -> Seq<T> {
        seq::take(self.boxed(), n)
    }

    fn skip_seq(self, n: usize) -> Seq<T> {
        seq::skip(self.boxed(), n)
    }

    fn peek_seq<F, Fut>(self, f: F) -> Seq<T>
    where
        F: FnMut(&T, usize) -> Fut + Send + 'static,
        Fut: Future<Output = SeqResult<()>> + Send + 'static,
    {
        seq::peek(self.boxed(), f)
    }

    fn chain_seq(self, next: Seq<T>) -> Seq<T> {
        seq::chain(self.boxed(), next)
    }

    /// Wrap in a fluent [`Pipe`] handle
    fn pipe_seq(self) -> Pipe<T> {
        Pipe::new(self.boxed())
    }
}

impl<T, S> SeqExt<T> for S
where
    T: Send + 'static,
    S: Stream<Item = SeqResult<T>> + Sized + Send + 'static,
{
}

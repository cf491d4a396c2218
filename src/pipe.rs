//! A fluent, move-aware handle over a single sequence.
//!
//! Sequences are stateful cursors; concurrent or repeated consumption of
//! one corrupts its ordering. [`Pipe`] encodes linear ownership at the type
//! level: every chaining and terminal method takes `self`, so once a handle
//! has been chained or consumed the compiler statically rejects any further
//! use of it. There is exactly one live, consumable reference to any
//! underlying sequence at a time, with no runtime flags or poison markers.

use futures_core::Stream;
use futures_util::stream::StreamExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::combine::combine;
use crate::consume;
use crate::error::SeqResult;
use crate::input::{flatten, Input};
use crate::seq::{self, Seq};

/// A handle owning exactly one sequence.
pub struct Pipe<T> {
    seq: Seq<T>,
}

/// Normalize every input into a sequence and merge them all into one pipe.
///
/// Bare values become one-item sequences, collections and live sequences
/// pass through, and pending inputs are awaited in place; the normalized
/// sources are then raced together with [`combine`].
pub fn pipe<T, I>(inputs: I) -> Pipe<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = Input<T>>,
{
    let sources: Vec<Seq<T>> = inputs.into_iter().map(Input::into_seq).collect();
    log::debug!("pipe: merging {} normalized inputs", sources.len());
    Pipe::new(combine(sources))
}

impl<T> Pipe<T>
where
    T: Send + 'static,
{
    /// Wrap an existing sequence
    pub fn new(seq: Seq<T>) -> Self {
        Pipe { seq }
    }

    /// Release the underlying sequence for external iteration
    pub fn into_seq(self) -> Seq<T> {
        self.seq
    }

    // ================================
    // Chaining (each consumes the handle and returns its successor)
    // ================================

    pub fn filter<F, Fut>(self, pred: F) -> Pipe<T>
    where
        F: FnMut(&T, usize) -> Fut + Send + 'static,
        Fut: Future<Output = SeqResult<bool>> + Send + 'static,
    {
        Pipe::new(seq::filter(self.seq, pred))
    }

    pub fn map<U, F, Fut>(self, f: F) -> Pipe<U>
    where
        U: Send + 'static,
        F: FnMut(T, usize) -> Fut + Send + 'static,
        Fut: Future<Output = SeqResult<U>> + Send + 'static,
    {
        Pipe::new(seq::map(self.seq, f))
    }

    pub fn take(self, n: usize) -> Pipe<T> {
        Pipe::new(seq::take(self.seq, n))
    }

    pub fn skip(self, n: usize) -> Pipe<T> {
        Pipe::new(seq::skip(self.seq, n))
    }

    pub fn peek<F, Fut>(self, f: F) -> Pipe<T>
    where
        F: FnMut(&T, usize) -> Fut + Send + 'static,
        Fut: Future<Output = SeqResult<()>> + Send + 'static,
    {
        Pipe::new(seq::peek(self.seq, f))
    }

    /// Concatenate: drain this pipe fully, then `next`
    pub fn chain(self, next: Seq<T>) -> Pipe<T> {
        Pipe::new(seq::chain(self.seq, next))
    }

    /// Race this pipe's sequence against `others`, interleaving as ready
    pub fn combine(self, others: Vec<Seq<T>>) -> Pipe<T> {
        let mut sources = Vec::with_capacity(others.len() + 1);
        sources.push(self.seq);
        sources.extend(others);
        Pipe::new(combine(sources))
    }

    // ================================
    // Terminal consumers
    // ================================

    /// Pull at most one item and discard the rest of the sequence
    pub async fn first(self) -> SeqResult<Option<T>> {
        consume::first(self.seq).await
    }

    pub async fn for_each<F, Fut>(self, f: F) -> SeqResult<()>
    where
        F: FnMut(T, usize) -> Fut + Send,
        Fut: Future<Output = SeqResult<()>> + Send + 'static,
    {
        consume::for_each(self.seq, f).await
    }

    pub async fn collect(self, limit: Option<usize>) -> SeqResult<Vec<T>> {
        consume::collect(self.seq, limit).await
    }

    pub async fn fold<A, F, Fut>(self, init: A, f: F) -> SeqResult<A>
    where
        A: Send,
        F: FnMut(A, T, usize) -> Fut + Send,
        Fut: Future<Output = SeqResult<A>> + Send,
    {
        consume::fold(self.seq, init, f).await
    }

    pub async fn find<F, Fut>(self, pred: F) -> SeqResult<Option<(T, usize)>>
    where
        F: FnMut(&T, usize) -> Fut + Send,
        Fut: Future<Output = SeqResult<bool>> + Send + 'static,
    {
        consume::find(self.seq, pred).await
    }

    pub async fn join(self, sep: &str) -> SeqResult<String>
    where
        T: ToString,
    {
        consume::join(self.seq, sep).await
    }
}

impl<T> Pipe<Input<T>>
where
    T: Send + 'static,
{
    /// Expand each input item in place, one level deep
    pub fn flat(self) -> Pipe<T> {
        Pipe::new(flatten(self.seq))
    }
}

impl<T> Stream for Pipe<T> {
    type Item = SeqResult<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().seq.poll_next_unpin(cx)
    }
}

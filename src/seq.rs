//! Core sequence type, source constructors, and lazy transformations.
//!
//! A [`Seq`] is a single-pass, pull-based asynchronous producer. It is not
//! restartable: once pulled, items are gone, and a second consumer pulling
//! the same sequence races the first and corrupts ordering. Everything here
//! is lazy; a combinator call does no work until the result is first polled.

use async_stream::stream;
use futures_util::pin_mut;
use futures_util::stream::{self, BoxStream, StreamExt};
use futures_util::future;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::SeqResult;

/// A boxed, single-pass asynchronous sequence of fallible items.
///
/// The `Result` item channel carries failure in-band: an `Err` item
/// terminates the sequence and no combinator pulls upstream past it.
pub type Seq<T> = BoxStream<'static, SeqResult<T>>;

// ================================
// Source Constructors
// ================================

/// Emit a single element as a sequence
pub fn emit<T>(item: T) -> Seq<T>
where
    T: Send + 'static,
{
    stream::once(future::ready(Ok(item))).boxed()
}

/// Create an empty sequence that completes immediately
pub fn empty<T>() -> Seq<T>
where
    T: Send + 'static,
{
    stream::empty().boxed()
}

/// Create a sequence from a synchronous iterator
pub fn from_iter<I, T>(iter: I) -> Seq<T>
where
    I: IntoIterator<Item = T> + Send + 'static,
    <I as IntoIterator>::IntoIter: Send,
    T: Send + 'static,
{
    stream::iter(iter.into_iter().map(Ok)).boxed()
}

/// Create a sequence from an iterator of pending values, awaiting each one
/// before it is yielded
pub fn from_futures<I, F, T>(iter: I) -> Seq<T>
where
    I: IntoIterator<Item = F> + Send + 'static,
    <I as IntoIterator>::IntoIter: Send,
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    stream! {
        for fut in iter {
            yield Ok(fut.await);
        }
    }
    .boxed()
}

/// Evaluate a future and emit its output as a length-1 sequence
pub fn eval<F, T>(fut: F) -> Seq<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    stream::once(async move { Ok(fut.await) }).boxed()
}

/// Like [`eval`] for futures that can fail; an `Err` output becomes the
/// sequence's terminating failure
pub fn try_eval<F, T>(fut: F) -> Seq<T>
where
    F: Future<Output = SeqResult<T>> + Send + 'static,
    T: Send + 'static,
{
    stream::once(fut).boxed()
}

/// Create a sequence that emits a single value after a delay.
///
/// This is the crate's timeout building block: merge an `emit_after`
/// sentinel with the work being bounded and stop at the sentinel.
pub fn emit_after<T>(item: T, duration: Duration) -> Seq<T>
where
    T: Send + 'static,
{
    stream::once(async move {
        sleep(duration).await;
        Ok(item)
    })
    .boxed()
}

// ================================
// Lazy Transformations
// ================================

/// Pair each item with its position: `(item, index)`, index starting at 0.
///
/// The index counts successfully pulled items, independent of any filtering
/// applied downstream.
pub fn enumerate<T>(s: Seq<T>) -> Seq<(T, usize)>
where
    T: Send + 'static,
{
    stream! {
        pin_mut!(s);
        let mut idx = 0usize;
        while let Some(item) = s.next().await {
            match item {
                Ok(v) => {
                    yield Ok((v, idx));
                    idx += 1;
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    }
    .boxed()
}

/// Transform each item with an awaited callback `f(item, index)`.
///
/// A callback failure terminates the produced sequence with that failure
/// and stops further upstream pulls.
pub fn map<T, U, F, Fut>(s: Seq<T>, mut f: F) -> Seq<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T, usize) -> Fut + Send + 'static,
    Fut: Future<Output = SeqResult<U>> + Send + 'static,
{
    let s = enumerate(s);
    stream! {
        pin_mut!(s);
        while let Some(item) = s.next().await {
            match item {
                Ok((v, idx)) => match f(v, idx).await {
                    Ok(u) => yield Ok(u),
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                },
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    }
    .boxed()
}

/// Keep only the items for which `pred(item, index)` resolves true
pub fn filter<T, F, Fut>(s: Seq<T>, mut pred: F) -> Seq<T>
where
    T: Send + 'static,
    F: FnMut(&T, usize) -> Fut + Send + 'static,
    Fut: Future<Output = SeqResult<bool>> + Send + 'static,
{
    let s = enumerate(s);
    stream! {
        pin_mut!(s);
        while let Some(item) = s.next().await {
            match item {
                Ok((v, idx)) => match pred(&v, idx).await {
                    Ok(true) => yield Ok(v),
                    Ok(false) => {}
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                },
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    }
    .boxed()
}

/// Slice: yield the first `n` items, then stop without pulling further.
///
/// `take(s, 0)` never polls upstream at all. Whatever remains of the
/// upstream sequence is dropped (releasing its resources) when the produced
/// sequence is dropped.
pub fn take<T>(s: Seq<T>, n: usize) -> Seq<T>
where
    T: Send + 'static,
{
    stream! {
        pin_mut!(s);
        let mut taken = 0usize;
        while taken < n {
            match s.next().await {
                Some(Ok(v)) => {
                    taken += 1;
                    yield Ok(v);
                }
                Some(Err(e)) => {
                    yield Err(e);
                    break;
                }
                None => break,
            }
        }
    }
    .boxed()
}

/// Slice: consume and discard the first `n` items, then yield the rest.
///
/// The skipped prefix is pulled, not short-circuited; upstream side effects
/// for those items still happen.
pub fn skip<T>(s: Seq<T>, n: usize) -> Seq<T>
where
    T: Send + 'static,
{
    stream! {
        pin_mut!(s);
        let mut seen = 0usize;
        while let Some(item) = s.next().await {
            match item {
                Ok(v) => {
                    if seen < n {
                        seen += 1;
                        continue;
                    }
                    yield Ok(v);
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    }
    .boxed()
}

/// Yield each item unchanged after awaiting `f(&item, index)` for its side
/// effect
pub fn peek<T, F, Fut>(s: Seq<T>, mut f: F) -> Seq<T>
where
    T: Send + 'static,
    F: FnMut(&T, usize) -> Fut + Send + 'static,
    Fut: Future<Output = SeqResult<()>> + Send + 'static,
{
    let s = enumerate(s);
    stream! {
        pin_mut!(s);
        while let Some(item) = s.next().await {
            match item {
                Ok((v, idx)) => match f(&v, idx).await {
                    Ok(()) => yield Ok(v),
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                },
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    }
    .boxed()
}

/// Concatenate two sequences: fully drain `a`, only then begin pulling `b`.
///
/// Sequential composition; contrast with [`crate::combine::combine`], which races.
pub fn chain<T>(a: Seq<T>, b: Seq<T>) -> Seq<T>
where
    T: Send + 'static,
{
    stream! {
        let mut failed = false;
        pin_mut!(a);
        while let Some(item) = a.next().await {
            failed = item.is_err();
            yield item;
            if failed {
                break;
            }
        }
        if !failed {
            pin_mut!(b);
            while let Some(item) = b.next().await {
                let stop = item.is_err();
                yield item;
                if stop {
                    break;
                }
            }
        }
    }
    .boxed()
}

//! Normalization boundary for heterogeneous inputs.
//!
//! [`Input`] is the fixed set of shapes a caller may hand to [`pipe`] or
//! feed through [`flatten`]: a bare value, a synchronous collection, a live
//! sequence, or a pending version of either. [`Input::into_seq`] is the
//! single place where all of them become a plain [`Seq`].
//!
//! [`pipe`]: crate::pipe::pipe

use async_stream::stream;
use futures::future::{BoxFuture, FutureExt};
use futures_util::pin_mut;
use futures_util::stream::StreamExt;
use std::future::Future;

use crate::seq::{emit, eval, from_iter, Seq};

/// One normalizable pipe input.
pub enum Input<T> {
    /// A bare value, yielded as a one-item sequence
    Value(T),
    /// A synchronous iterator of values
    Iter(Box<dyn Iterator<Item = T> + Send + 'static>),
    /// An already-live sequence
    Seq(Seq<T>),
    /// A pending bare value
    Future(BoxFuture<'static, T>),
    /// A pending sequence; awaited once, then drained in place
    Deferred(BoxFuture<'static, Seq<T>>),
}

impl<T> Input<T>
where
    T: Send + 'static,
{
    pub fn value(v: T) -> Self {
        Input::Value(v)
    }

    pub fn iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        <I as IntoIterator>::IntoIter: Send + 'static,
    {
        Input::Iter(Box::new(iter.into_iter()))
    }

    pub fn seq(s: Seq<T>) -> Self {
        Input::Seq(s)
    }

    pub fn future<F>(fut: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Input::Future(fut.boxed())
    }

    pub fn deferred<F>(fut: F) -> Self
    where
        F: Future<Output = Seq<T>> + Send + 'static,
    {
        Input::Deferred(fut.boxed())
    }

    /// Normalize into a sequence
    pub fn into_seq(self) -> Seq<T> {
        match self {
            Input::Value(v) => emit(v),
            Input::Iter(iter) => from_iter(iter),
            Input::Seq(s) => s,
            Input::Future(fut) => eval(fut),
            Input::Deferred(fut) => stream! {
                let s = fut.await;
                pin_mut!(s);
                while let Some(item) = s.next().await {
                    yield item;
                }
            }
            .boxed(),
        }
    }
}

impl<T> From<Vec<T>> for Input<T>
where
    T: Send + 'static,
{
    fn from(values: Vec<T>) -> Self {
        Input::iter(values)
    }
}

/// One level of depth flattening: each [`Input`] item is expanded in place
/// into its sub-items; per-input order is preserved and inputs are expanded
/// strictly one after another.
pub fn flatten<T>(s: Seq<Input<T>>) -> Seq<T>
where
    T: Send + 'static,
{
    stream! {
        pin_mut!(s);
        while let Some(item) = s.next().await {
            match item {
                Ok(input) => {
                    let inner = input.into_seq();
                    pin_mut!(inner);
                    let mut failed = false;
                    while let Some(sub) = inner.next().await {
                        failed = sub.is_err();
                        yield sub;
                        if failed {
                            break;
                        }
                    }
                    if failed {
                        break;
                    }
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

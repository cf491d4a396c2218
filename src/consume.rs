//! Terminal consumers: drive a sequence to completion and produce one
//! eventual result. Each stops pulling at the natural end or at the first
//! failure, whichever comes first.

use futures_util::pin_mut;
use futures_util::stream::StreamExt;
use std::future::Future;

use crate::error::SeqResult;
use crate::seq::{enumerate, take, Seq};

/// Invoke `f(item, index)` for every item
pub async fn for_each<T, F, Fut>(s: Seq<T>, mut f: F) -> SeqResult<()>
where
    T: Send + 'static,
    F: FnMut(T, usize) -> Fut + Send,
    Fut: Future<Output = SeqResult<()>> + Send,
{
    let s = enumerate(s);
    pin_mut!(s);
    while let Some(item) = s.next().await {
        let (v, idx) = item?;
        f(v, idx).await?;
    }
    Ok(())
}

/// Gather items into an ordered `Vec`.
///
/// With `limit` given, the sequence is first composed with [`take`], so an
/// unbounded upstream is never pulled past the limit.
pub async fn collect<T>(s: Seq<T>, limit: Option<usize>) -> SeqResult<Vec<T>>
where
    T: Send + 'static,
{
    let s = match limit {
        Some(n) => take(s, n),
        None => s,
    };
    pin_mut!(s);
    let mut out = Vec::new();
    while let Some(item) = s.next().await {
        out.push(item?);
    }
    Ok(out)
}

/// Sequentially reduce the sequence: `acc = f(acc, item, index)`
pub async fn fold<T, A, F, Fut>(s: Seq<T>, init: A, mut f: F) -> SeqResult<A>
where
    T: Send + 'static,
    A: Send,
    F: FnMut(A, T, usize) -> Fut + Send,
    Fut: Future<Output = SeqResult<A>> + Send,
{
    let s = enumerate(s);
    pin_mut!(s);
    let mut acc = init;
    while let Some(item) = s.next().await {
        let (v, idx) = item?;
        acc = f(acc, v, idx).await?;
    }
    Ok(acc)
}

/// Return the first `(item, index)` matching `pred`, pulling nothing past
/// the match; `None` if the sequence ends without one
pub async fn find<T, F, Fut>(s: Seq<T>, mut pred: F) -> SeqResult<Option<(T, usize)>>
where
    T: Send + 'static,
    F: FnMut(&T, usize) -> Fut + Send,
    Fut: Future<Output = SeqResult<bool>> + Send,
{
    let s = enumerate(s);
    pin_mut!(s);
    while let Some(item) = s.next().await {
        let (v, idx) = item?;
        if pred(&v, idx).await? {
            return Ok(Some((v, idx)));
        }
    }
    Ok(None)
}

/// Render each item with `ToString` and concatenate, inserting `sep`
/// between items (not before the first)
pub async fn join<T>(s: Seq<T>, sep: &str) -> SeqResult<String>
where
    T: ToString + Send + 'static,
{
    let sep = sep.to_string();
    fold(s, String::new(), move |mut acc, item, idx| {
        let sep = sep.clone();
        async move {
            if idx > 0 {
                acc.push_str(&sep);
            }
            acc.push_str(&item.to_string());
            Ok(acc)
        }
    })
    .await
}

/// Pull at most one item and return it, releasing the rest of the sequence
pub async fn first<T>(s: Seq<T>) -> SeqResult<Option<T>>
where
    T: Send + 'static,
{
    let s = take(s, 1);
    pin_mut!(s);
    match s.next().await {
        Some(item) => item.map(Some),
        None => Ok(None),
    }
}

//! Fan-in merge engine.
//!
//! [`combine`] races N independent sequences and yields items in whatever
//! order each source's next item becomes ready, while strictly preserving
//! relative order within each source. Cross-source interleaving is
//! unspecified; consumers must not rely on one fixed global order.

use async_stream::stream;
use futures_util::pin_mut;
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

use crate::error::SeqResult;
use crate::seq::Seq;

/// One in-flight fetch. The future owns its source for the duration of the
/// pull and hands it back alongside the result, so a source never has more
/// than one outstanding fetch and per-source ordering is preserved.
async fn fetch<T>(mut source: Seq<T>) -> (Option<SeqResult<T>>, Seq<T>) {
    let item = source.next().await;
    (item, source)
}

/// Merge N sequences into one by racing their next items.
///
/// One fetch per source is kept in flight. Whichever settles first wins the
/// race: an item re-arms that source and is yielded downstream; completion
/// retires the source from the race for good. The merge ends exactly when
/// the race set is empty.
///
/// A source failure propagates to the consumer and ends the merge. On every
/// exit path — normal drain, a downstream consumer dropping the merge early
/// (e.g. a `take` limit), or a propagated failure — the remaining race set
/// is dropped, which drops each pending fetch and the sequence it owns.
/// That drop is the cooperative cancellation of still-active sources: it is
/// synchronous and never waits on a slow peer.
pub fn combine<T>(sources: Vec<Seq<T>>) -> Seq<T>
where
    T: Send + 'static,
{
    stream! {
        let mut in_flight: FuturesUnordered<_> =
            sources.into_iter().map(fetch).collect();
        log::trace!("combine: racing {} sources", in_flight.len());
        while let Some((item, source)) = in_flight.next().await {
            match item {
                Some(Ok(v)) => {
                    in_flight.push(fetch(source));
                    yield Ok(v);
                }
                Some(Err(e)) => {
                    yield Err(e);
                    break;
                }
                None => {
                    log::trace!(
                        "combine: source finished, {} still racing",
                        in_flight.len()
                    );
                }
            }
        }
    }
    .boxed()
}

/// [`combine`] for a source list that is itself still pending; the list is
/// awaited once at entry, then merged as usual
pub fn combine_deferred<T, F>(sources: F) -> Seq<T>
where
    T: Send + 'static,
    F: Future<Output = Vec<Seq<T>>> + Send + 'static,
{
    stream! {
        let s = combine(sources.await);
        pin_mut!(s);
        while let Some(item) = s.next().await {
            yield item;
        }
    }
    .boxed()
}

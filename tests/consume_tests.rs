use async_stream::stream;
use futures_util::future;
use futures_util::stream::StreamExt;
use seqpipe::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn counting_source(n: usize, pulls: Arc<AtomicUsize>) -> Seq<usize> {
    stream! {
        for i in 0..n {
            pulls.fetch_add(1, Ordering::SeqCst);
            yield Ok(i);
        }
    }
    .boxed()
}

#[test]
fn test_collect_returns_all_items_in_order() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = collect(from_iter(vec![3, 1, 4, 1, 5]), None).await.unwrap();
        assert_eq!(result, vec![3, 1, 4, 1, 5]);
    });
}

#[test]
fn test_collect_with_limit_never_overpulls() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let pulls = Arc::new(AtomicUsize::new(0));
        let result = collect(counting_source(100, pulls.clone()), Some(4))
            .await
            .unwrap();
        assert_eq!(result, vec![0, 1, 2, 3]);
        assert_eq!(pulls.load(Ordering::SeqCst), 4);
    });
}

#[test]
fn test_collect_limit_larger_than_source() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let result = collect(from_iter(vec![1, 2]), Some(10)).await.unwrap();
        assert_eq!(result, vec![1, 2]);
    });
}

#[test]
fn test_for_each_visits_every_item_with_index() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen2 = seen.clone();
        for_each(from_iter(vec!["a", "b"]), move |v, idx| {
            seen2.lock().unwrap().push((v, idx));
            future::ready(Ok(()))
        })
        .await
        .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![("a", 0), ("b", 1)]);
    });
}

#[test]
fn test_for_each_callback_failure_stops_pulling() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let pulls = Arc::new(AtomicUsize::new(0));
        let result = for_each(counting_source(10, pulls.clone()), |_, idx| async move {
            if idx == 1 {
                Err(SeqError::callback("stop here"))
            } else {
                Ok(())
            }
        })
        .await;
        assert_eq!(result, Err(SeqError::callback("stop here")));
        assert_eq!(pulls.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn test_fold_sums() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let total = fold(from_iter(vec![1, 2, 3]), 0, |acc, x, _| async move { Ok(acc + x) })
            .await
            .unwrap();
        assert_eq!(total, 6);
    });
}

#[test]
fn test_fold_empty_returns_initial() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let total = fold(empty::<i32>(), 41, |acc, x, _| async move { Ok(acc + x) })
            .await
            .unwrap();
        assert_eq!(total, 41);
    });
}

#[test]
fn test_find_returns_item_and_index() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let hit = find(from_iter(vec![1, 2, 3]), |v, _| future::ready(Ok(*v == 2)))
            .await
            .unwrap();
        assert_eq!(hit, Some((2, 1)));
    });
}

#[test]
fn test_find_not_found() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let hit = find(from_iter(vec![1, 2, 3]), |v, _| future::ready(Ok(*v == 9)))
            .await
            .unwrap();
        assert_eq!(hit, None);
    });
}

#[test]
fn test_find_stops_pulling_after_match() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let pulls = Arc::new(AtomicUsize::new(0));
        let hit = find(counting_source(100, pulls.clone()), |v, _| {
            future::ready(Ok(*v == 2))
        })
        .await
        .unwrap();
        assert_eq!(hit, Some((2, 2)));
        assert_eq!(pulls.load(Ordering::SeqCst), 3);
    });
}

#[test]
fn test_join() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        assert_eq!(join(empty::<i32>(), ",").await.unwrap(), "");
        assert_eq!(
            join(from_iter(vec!["a", "b", "c"]), ",").await.unwrap(),
            "a,b,c"
        );
        assert_eq!(join(from_iter(vec![1, 2, 3]), " - ").await.unwrap(), "1 - 2 - 3");
    });
}

#[test]
fn test_first() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        assert_eq!(first(from_iter(vec![7, 8, 9])).await.unwrap(), Some(7));
        assert_eq!(first(empty::<i32>()).await.unwrap(), None);
    });
}

#[test]
fn test_first_pulls_exactly_one() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let pulls = Arc::new(AtomicUsize::new(0));
        assert_eq!(first(counting_source(50, pulls.clone())).await.unwrap(), Some(0));
        assert_eq!(pulls.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn test_source_failure_surfaces_at_consumer() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let s: Seq<i32> = stream! {
            yield Ok(1);
            yield Err(SeqError::source("producer died"));
        }
        .boxed();
        let result = collect(s, None).await;
        assert_eq!(result, Err(SeqError::source("producer died")));
    });
}

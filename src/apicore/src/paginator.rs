// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Convert list RPCs into streams.
//!
//! List RPCs return one page of results and a `nextPageToken`. An empty
//! token marks the last page. This module turns a function that fetches a
//! single page into a [futures::Stream] of pages, or of items.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a response that can be iterated over with [Paginator].
pub trait PageableResponse {
    /// The type of the items listed in each page.
    type PageItem;

    /// The token to request the next page, empty on the last page.
    fn next_page_token(&self) -> String;

    /// Consumes the response and returns the items in the page.
    fn items(self) -> Vec<Self::PageItem>;
}

/// An adapter that converts list RPCs as defined by [AIP-4233](https://google.aip.dev/client-libraries/4233)
/// into a [futures::Stream] that can be iterated over in an async fashion.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>>>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + 'static,
    E: 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        tracing::debug!(last_page = next.is_empty(), "fetched page");
                        let state = if next.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Flattens the pages into a stream of items.
    ///
    /// An error fetching a page is returned as the last element of the
    /// stream.
    pub fn items(self) -> ItemPaginator<T::PageItem, E>
    where
        T::PageItem: 'static,
    {
        let stream = self.flat_map(|page| {
            let items: Vec<Result<T::PageItem, E>> = match page {
                Ok(page) => page.items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        ItemPaginator {
            stream: Box::pin(stream),
        }
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of the items returned by a sequence of list RPCs.
#[pin_project]
pub struct ItemPaginator<I, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<I, E>>>>,
}

impl<I, E> ItemPaginator<I, E> {
    /// Returns the next item of the wrapped stream.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<I, E> Stream for ItemPaginator<I, E> {
    type Item = Result<I, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
        fn items(self) -> Vec<String> {
            self.items
        }
    }

    type Pages = Arc<Mutex<VecDeque<Result<TestResponse, String>>>>;

    fn page(items: &[&str], token: &str) -> Result<TestResponse, String> {
        Ok(TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        })
    }

    fn paginator(pages: Pages, tokens: Arc<Mutex<Vec<String>>>) -> Paginator<TestResponse, String> {
        Paginator::new(String::new(), move |token| {
            let pages = pages.clone();
            let tokens = tokens.clone();
            async move {
                tokens.lock().unwrap().push(token);
                pages
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| Err("no more pages".to_string()))
            }
        })
    }

    #[tokio::test]
    async fn stops_on_empty_token() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            page(&["a", "b"], "t1"),
            page(&["c"], "t2"),
            page(&[], ""),
        ])));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut paginator = paginator(pages.clone(), tokens.clone());
        let mut count = 0;
        while let Some(p) = paginator.next().await {
            assert!(p.is_ok(), "{p:?}");
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(*tokens.lock().unwrap(), vec!["", "t1", "t2"]);
        assert!(pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stops_on_error() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            page(&["a"], "t1"),
            Err("unavailable".to_string()),
            page(&["b"], ""),
        ])));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut paginator = paginator(pages.clone(), tokens);
        assert!(matches!(paginator.next().await, Some(Ok(_))));
        assert!(matches!(paginator.next().await, Some(Err(ref e)) if e == "unavailable"));
        assert!(paginator.next().await.is_none());
        assert_eq!(pages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn items() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            page(&["a", "b"], "t1"),
            page(&[], "t2"),
            page(&["c"], ""),
        ])));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let mut items = paginator(pages, tokens).items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.expect("all pages are successful"));
        }
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn items_with_error() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            page(&["a"], "t1"),
            Err("unavailable".to_string()),
        ])));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let got: Vec<_> = paginator(pages, tokens).items().collect().await;
        assert_eq!(got, vec![Ok("a".to_string()), Err("unavailable".to_string())]);
    }
}

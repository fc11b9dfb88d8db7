//! Paging through list endpoints.
//!
//! GitHub returns list results one page at a time and advertises further
//! pages in the `Link` header:
//! `<https://api.github.com/repositories/1/forks?page=2>; rel="next", <...?page=5>; rel="last"`.
//! [`paginate`] turns that into a lazy stream of items.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::api_connection::into_success;
use crate::connection::{ApiRequest, Connection, Parameters};
use crate::error::Error;

/// Controls how many results a list call fetches.
///
/// All fields are optional; `ApiOptions::none()` lets GitHub pick the page
/// size and fetches every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiOptions {
    /// Results per page (`per_page`)
    pub page_size: Option<u32>,
    /// First page to fetch, 1-based (`page`)
    pub start_page: Option<u32>,
    /// Maximum number of pages to fetch
    pub page_count: Option<u32>,
}

impl ApiOptions {
    /// No paging constraints.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            page_size: None,
            start_page: None,
            page_count: None,
        }
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub const fn with_start_page(mut self, start_page: u32) -> Self {
        self.start_page = Some(start_page);
        self
    }

    #[must_use]
    pub const fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    /// Reject zero values, which GitHub would silently reinterpret.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` naming the offending field.
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("page_size", self.page_size),
            ("start_page", self.start_page),
            ("page_count", self.page_count),
        ];
        for (name, value) in fields {
            if value == Some(0) {
                return Err(Error::invalid_argument(name, "must be greater than zero"));
            }
        }
        Ok(())
    }

    /// Add `per_page` / `page` to a parameter map.
    pub fn apply(&self, parameters: &mut Parameters) {
        if let Some(size) = self.page_size {
            parameters.insert("per_page".to_string(), size.to_string());
        }
        if let Some(page) = self.start_page {
            parameters.insert("page".to_string(), page.to_string());
        }
    }
}

/// Links parsed from a `Link` response header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

impl PageLinks {
    /// Returns true if there are more pages to fetch.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the total number of pages if the `last` link is present.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.last.as_deref().and_then(page_number)
    }
}

/// Parse the Link header to extract pagination links.
///
/// Unknown relations and malformed parts are ignored.
#[must_use]
pub fn parse_link_header(link_header: &str) -> PageLinks {
    let mut links = PageLinks::default();

    let mut rest = link_header;

    // URLs may contain commas, so each link-value is located by its `<...>`
    // target rather than by splitting the header on ','.
    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('>') else {
            break;
        };
        let url = &after_open[..close];
        let tail = &after_open[close + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());
        let params = &tail[..params_end];
        rest = &tail[params_end..];

        let rel = params.split(';').find_map(|segment| {
            segment
                .trim()
                .trim_end_matches(',')
                .trim_end()
                .strip_prefix("rel=")
                .map(|value| value.trim_matches('"'))
        });

        if let Some(rel) = rel {
            // `rel` may hold several space-separated relation types
            for rel_type in rel.split_whitespace() {
                let slot = match rel_type {
                    "first" => &mut links.first,
                    "prev" => &mut links.prev,
                    "next" => &mut links.next,
                    "last" => &mut links.last,
                    _ => continue,
                };
                *slot = Some(url.to_string());
            }
        }
    }

    links
}

/// Extract the `page` query parameter from a URL.
#[must_use]
pub fn page_number(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

struct Cursor {
    next: Option<ApiRequest>,
    pages_left: Option<u32>,
    page: u32,
}

/// Stream every item of a list endpoint, fetching pages on demand.
///
/// The first request carries `request.parameters` plus `options`; later
/// requests follow the `next` link verbatim. Stops when no `next` link is
/// returned or `options.page_count` pages have been read.
pub fn paginate<T>(
    connection: Arc<dyn Connection>,
    request: ApiRequest,
    options: &ApiOptions,
) -> BoxStream<'static, Result<T, Error>>
where
    T: DeserializeOwned + Send + 'static,
{
    let mut first = request;
    options.apply(&mut first.parameters);

    let cursor = Cursor {
        next: Some(first),
        pages_left: options.page_count,
        page: 0,
    };

    stream::try_unfold(cursor, move |cursor| {
        let connection = Arc::clone(&connection);
        async move {
            let Some(request) = cursor.next else {
                return Ok(None);
            };
            if cursor.pages_left == Some(0) {
                return Ok(None);
            }

            let response = into_success(connection.send(request).await?)?;
            let links = response
                .header("link")
                .map(parse_link_header)
                .unwrap_or_default();
            let items: Vec<T> = serde_json::from_value(response.body)?;

            let page = cursor.page + 1;
            trace!(page, items = items.len(), has_next = links.has_next(), "Fetched page");

            let next_cursor = Cursor {
                next: links.next.map(ApiRequest::get),
                pages_left: cursor.pages_left.map(|n| n - 1),
                page,
            };
            Ok::<_, Error>(Some((items, next_cursor)))
        }
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, Error>)))
    .try_flatten()
    .boxed()
}

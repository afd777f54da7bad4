use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::index::{ExecuteQueryError, QueryExecutor, QueryResponse, Variables};
use crate::models::PageInfo;

/// Where the repository-listing queries expose their page info, relative to `data`.
pub const REPOSITORIES_PAGE_INFO: &str = "/user/repositories/pageInfo";

pub const CURSOR_VARIABLE: &str = "cursor";

enum Cursor {
    Next(Option<String>),
    Done,
}

/// Lazy page sequence for one query. Finite and not restartable: after the
/// last page, or after an error has been yielded, it only returns `None`.
pub struct Pages<'a, E: QueryExecutor + ?Sized> {
    executor: &'a E,
    query: &'a str,
    params: Variables,
    page_info_pointer: &'a str,
    cursor: Cursor,
}

pub fn paginate<'a, E: QueryExecutor + ?Sized>(
    executor: &'a E,
    query: &'a str,
    params: Variables,
) -> Pages<'a, E> {
    Pages::new(executor, query, params, REPOSITORIES_PAGE_INFO)
}

impl<'a, E: QueryExecutor + ?Sized> Pages<'a, E> {
    pub fn new(executor: &'a E, query: &'a str, params: Variables, page_info_pointer: &'a str) -> Self {
        Self {
            executor,
            query,
            params,
            page_info_pointer,
            cursor: Cursor::Next(None),
        }
    }

    fn advance(&self, current: Option<String>, response: &QueryResponse) -> Cursor {
        let Some(page_info) = read_page_info(response, self.page_info_pointer) else {
            debug!(pointer = self.page_info_pointer, "page info missing, ending pagination");
            return Cursor::Done;
        };

        if !page_info.has_next_page {
            return Cursor::Done;
        }

        match page_info.end_cursor {
            None => {
                warn!("hasNextPage without endCursor, ending pagination");
                Cursor::Done
            }
            Some(next) if current.as_deref() == Some(next.as_str()) => {
                warn!(cursor = %next, "endCursor did not advance, ending pagination");
                Cursor::Done
            }
            Some(next) => Cursor::Next(Some(next)),
        }
    }
}

impl<E: QueryExecutor + ?Sized> Iterator for Pages<'_, E> {
    type Item = Result<QueryResponse, ExecuteQueryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Next(current) => current,
            Cursor::Done => return None,
        };

        let mut variables = self.params.clone();
        variables.insert(
            CURSOR_VARIABLE.to_owned(),
            current.clone().map_or(Value::Null, Value::String),
        );

        debug!(cursor = ?current, "fetching page");

        match self.executor.execute(self.query, &variables) {
            Ok(response) => {
                self.cursor = self.advance(current, &response);
                Some(Ok(response))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl<E: QueryExecutor + ?Sized> std::iter::FusedIterator for Pages<'_, E> {}

fn read_page_info(response: &QueryResponse, pointer: &str) -> Option<PageInfo> {
    PageInfo::deserialize(response.pointer(pointer)?).ok()
}

//! Blocking GitHub GraphQL access
//!
//! - `index`: single request/response exchange (`QueryExecutor`)
//! - `pagination`: cursor-driven page iterator over an executor
//! - `models`: typed views over the `data` payload
//! - `queries`: query documents used by the cards

pub mod index;
pub mod models;
pub mod pagination;
pub mod queries;

pub use index::{
    datetime_variable, ExecuteQueryError, GitHubGraphQLClient, QueryErrorKind, QueryExecutor,
    QueryResponse, Variables,
};
pub use pagination::{paginate, Pages};

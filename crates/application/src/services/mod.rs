//! Application services - Use case implementations

mod address_search_service;
mod result_list_presenter;

pub use address_search_service::{AddressSearchService, SearchState};
pub use result_list_presenter::{ResultListPresenter, ResultRow};

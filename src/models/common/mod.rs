pub mod list_view;
pub mod response;

pub use list_view::{
    EMPTY_LIST_MESSAGE, ListQuery, ListResponse, Listable, SortOrder, SortValue, apply_list_view,
};
pub use response::ApiResponse;

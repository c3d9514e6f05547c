mod request_handler;

pub use request_handler::{
    __path_assign_volunteers, __path_create_request, __path_get_matches, __path_list_requests,
    assign_volunteers, create_request, get_matches, list_requests, RequestState,
};

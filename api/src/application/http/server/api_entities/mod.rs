pub mod api_error;
pub mod form;
pub mod response;

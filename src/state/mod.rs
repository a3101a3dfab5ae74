pub mod app_state;
pub mod mode;
pub mod request_state;
pub mod response_state;
pub mod transition;

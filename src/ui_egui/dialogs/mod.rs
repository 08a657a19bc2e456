pub mod event_details;

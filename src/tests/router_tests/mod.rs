mod api_tests;
mod error_tests;
mod page_tests;

pub mod bookings;
pub mod home;
pub mod laptop_detail;

pub use bookings::bookings_page;
pub use home::{home_page, HomeVm};
pub use laptop_detail::laptop_detail_page;

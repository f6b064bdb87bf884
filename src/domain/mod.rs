pub mod booking;
pub mod laptop;

pub use booking::{Booking, BookingView};
pub use laptop::{Laptop, LaptopView};

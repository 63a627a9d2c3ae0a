pub mod booking;
pub mod profile;
pub mod ticket;
pub mod user;

pub use booking::Booking;
pub use profile::Profile;
pub use ticket::{TicketCategory, TicketSelection};
pub use user::User;

pub mod booking_status;
pub mod payment_method;
pub mod payment_status;
pub mod product_status;
pub mod user_role;

pub use booking_status::BookingStatus;
pub use payment_method::PaymentMethod;
pub use payment_status::PaymentStatus;
pub use product_status::ProductStatus;
pub use user_role::UserRole;

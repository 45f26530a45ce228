//! Types and static catalogs shared by the Clearway backend and frontend.
//!
//! Everything here compiles for both the native server and the `wasm32`
//! frontend bundle, so it stays free of runtime-specific dependencies.

pub mod booking;
pub mod checkout;
pub mod contact;
pub mod endpoints;
pub mod locations;
pub mod packages;
pub mod site;

pub use booking::{BookingError, BookingRequest, BookingResponse};
pub use checkout::{CheckoutSessionDetails, CreateCheckoutRequest, CreateCheckoutResponse};
pub use contact::{ContactError, ContactForm, ContactMessage};
pub use endpoints::{with_fallback, Endpoint, FallbackError};
pub use locations::{find_location, Location, LOCATIONS};
pub use packages::{find_package, select_package, Package, PackageSelection, PACKAGES};

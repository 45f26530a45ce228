#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend when running trunk serve locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // same origin in production
}

pub const SUPERSAAS_SCHEDULE_URL: &str = "https://www.supersaas.com/schedule/clearway/Test_Day_Rental";
pub const INSTAGRAM_HANDLE: &str = "clearwaydriving";

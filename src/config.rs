#[cfg(debug_assertions)]
pub fn log_submission_payloads() -> bool {
    true  // Development builds echo the composed quote payload to the console
}

#[cfg(not(debug_assertions))]
pub fn log_submission_payloads() -> bool {
    false  // Production builds keep visitor input out of the console
}

pub fn contact_email() -> &'static str {
    "hello@incodexbd.com"
}

pub mod config;
pub mod contact;
pub mod nav;
pub mod section;
pub mod theme;

// string validation
//
// deliberately loose: one @, no whitespace, and a dot somewhere in the domain
pub const EMAIL_REGEX: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

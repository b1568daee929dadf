pub mod aggregate;
pub mod baseline;
pub mod error;
pub mod round;
pub mod sg;
// cmd and reports are binary modules (in main.rs or distinct files);
// the library surface above is what the capture/reporting layer consumes.

//! Embedded gallows drawings
//!
//! Drawing set compiled into the binary at build time.

// Include generated drawings from build script
include!(concat!(env!("OUT_DIR"), "/stages.rs"));

//! Data models for the phone directory.

pub mod contact;

pub use contact::Contact;

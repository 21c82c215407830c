pub mod contact;
pub mod download;

pub mod crypto;
pub mod mail;
pub mod media;
pub mod store;

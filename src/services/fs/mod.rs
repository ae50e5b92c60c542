pub mod collate;
pub mod listing;
pub mod permissions;

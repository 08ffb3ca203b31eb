mod analysis;
mod auth;
mod records;

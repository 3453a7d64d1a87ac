mod appointment;
mod inventory;
mod notification;
mod user;
mod user_store;
mod vehicle;

//! Request handlers for the watchlist API.
//!
//! Handlers validate the request payload, delegate to the watchlist store
//! held in application state, and map failures via `AppError`.

pub mod watchlist;

//! Laptop invoice generator: a purchase form that produces a QR-coded
//! invoice and exports it as `invoice.png`.

pub mod bootstrap;
pub mod component;
pub mod config;
pub mod services;
pub mod session;

#[cfg(test)]
mod testing;

pub use bootstrap::init_foundation;
pub use component::{InvoiceComponent, InvoiceError};

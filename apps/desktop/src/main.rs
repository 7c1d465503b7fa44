//! # Inventory Desktop Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin ──► Command ──► ProductWindow ──► ProductStore ──► SQLite       │
//! │                              │                                          │
//! │  stdout ◄── render ◄─────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs.

#[tokio::main]
async fn main() -> Result<(), inventory_desktop::Error> {
    inventory_desktop::run().await
}

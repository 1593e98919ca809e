//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions, independent of world
//! entities. Menus cover the whole window and are driven by keyboard and
//! mouse.
//!
//! # Available Components
//!
//! - [`MenuLayout`] - centred full-screen menu with headers and items
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crate::gui::{MenuEntry, MenuLayout, Target};
//!
//! // Build once when the scene is entered
//! let mut menu = MenuLayout::build(window, &entries, &style, &mut metrics)?;
//!
//! // Handle input
//! if let Some(action) = menu.handle_event(&event) { /* ... */ }
//!
//! // Render
//! menu.render(&mut surface)?;
//! ```

pub mod menu;

pub use menu::{MenuAction, MenuEntry, MenuItem, MenuLayout, MenuStyle, Target};

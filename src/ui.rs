//! UI module for Rosterdeck
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;

//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared between the two
//! page flavors (standalone doc pages and book chapters): the document
//! shell, the book sidebar navigation, and the footer variants.

pub mod footer;
pub mod layout;
pub mod nav;

//! Page generation modules for the two page flavors
//!
//! This module organizes the HTML page templates by flavor (standalone
//! doc page, book chapter). Each page module composes shared components
//! from the components module around a rendered markdown fragment.

pub mod book;
pub mod doc;

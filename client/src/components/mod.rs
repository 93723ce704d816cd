//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the generated lists while reading
//! shared state from Leptos context providers. List rows take precomputed
//! display rows from `timeline::display` and hold no state of their own.

pub mod animated_background;
pub mod code_block;
pub mod code_display;
pub mod complete_view;
pub mod design_system_item;
pub mod file_item;
pub mod generation_process;
pub mod header;
pub mod hero;
pub mod icon;
pub mod input_form;
pub mod processing_view;
pub mod progress_bar;
pub mod typed_text;

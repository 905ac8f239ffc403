//! Header rewriting — migrate legacy sortable table headers to the `Button` form.
//!
//! Reads the two fixed table components, replaces every legacy
//! `<button><span>Label</span><ArrowUpDown /></button>` header with a ghost
//! `Button` that calls `handleSort` with a key derived from the label, and
//! writes the results back (or returns a dry-run preview).

mod pattern;
mod rewrite;

pub use pattern::{render_target, sort_key, HeaderPattern, TextRewrite};
pub use rewrite::{apply_rewrite, plan_rewrite, rewrite_headers, FileRewrite, RewriteReport};

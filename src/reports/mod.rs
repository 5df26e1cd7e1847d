//! HTML report generation.
//!
//! Rendering happens in two steps. [`render_report`] walks the aggregated records in
//! license-type order and accumulates two HTML fragments: the index (one list item per
//! license type) and the content (license text plus attribution table per license type).
//! [`compose`] then streams a template through to the output, splicing the fragments in
//! at the `%index%` and `%content%` markers.

mod html;
mod template;

pub use html::{MISSING_LICENSE_PREFIX, RenderedReport, anchor_for, render_report};
pub use template::{BUNDLED_TEMPLATE, CONTENT_MARKER, INDEX_MARKER, TemplateSource, compose};

use crate::aggregator::Aggregator;
use crate::error::Error;
use crate::licenses::{LicenseResolver, LicenseText};
use crate::metadata::LicenseRecord;
use std::borrow::Cow;

const LOG_TARGET: &str = "    report";

/// Start of the message rendered in place of a license text that could not be found.
pub const MISSING_LICENSE_PREFIX: &str = "No license document attached for";

const ATTRIBUTION_HEADING: &str =
    "<br /><span style=\"font-size:0.86em; font-weight: bold;\">Copyright Notice and Attribution Chart:</span><br /><br />";

const TABLE_START: &str = "<table width=\"600px\" border=\"1\" class=\"liTable\" style=\"border:1px solid black; border-collapse:collapse;\"><thead>";

const TABLE_HEADER: &str = "<tr><th width=\"5%\">No</th><th width=\"20%\">Licensor</th><th width=\"15%\">Library</th><th width=\"30%\">Description</th><th width=\"10%\">Date(s)</th><th width=\"20%\">Acknowledgements</th></tr>";

const TABLE_END: &str = "</tbody></table>&#xBB; <a href=\"#top\" style=\"font-size:0.76em;\">top</a><p>&nbsp;</p>";

/// The rendered index and content fragments of one report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedReport {
    pub index: String,
    pub content: String,

    /// License types rendered with the missing-license placeholder.
    pub missing_licenses: Vec<String>,
}

/// In-document anchor name for a license type.
#[must_use]
pub fn anchor_for(license_type: &str) -> String {
    license_type.replace(' ', "_")
}

/// Render the index and content fragments for every license type, in sorted order.
///
/// With `escape_html` set, license types, record fields and license texts are
/// HTML-escaped before being interpolated. Without it they are inserted verbatim.
///
/// # Errors
///
/// Returns an error if a license text exists but cannot be read.
pub fn render_report(aggregator: &Aggregator, resolver: &LicenseResolver, escape_html: bool) -> Result<RenderedReport, Error> {
    let mut renderer = Renderer {
        escape_html,
        report: RenderedReport::default(),
    };

    for (license_type, records) in aggregator.groups() {
        let text = resolver.resolve(license_type)?;
        renderer.render_license_type(license_type, text.as_ref(), records);
    }

    Ok(renderer.report)
}

struct Renderer {
    escape_html: bool,
    report: RenderedReport,
}

impl Renderer {
    fn text<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            Cow::Owned(html_escape(s))
        } else {
            Cow::Borrowed(s)
        }
    }

    fn render_license_type(&mut self, license_type: &str, text: Option<&LicenseText>, records: &[LicenseRecord]) {
        let anchor = self.text(&anchor_for(license_type)).into_owned();
        let title = self.text(license_type).into_owned();

        self.report.index.push_str(&format!("<li><a href=\"#{anchor}\">{title}</a></li>"));

        let content = &mut self.report.content;
        content.push_str(&format!("<p /><a name=\"{anchor}\"></a><h2>{title}</h2><p />"));

        if let Some(text) = text {
            content.push_str("<pre>");
            for line in &text.lines {
                let line = if self.escape_html { Cow::Owned(html_escape(line)) } else { Cow::Borrowed(line.as_str()) };
                content.push_str(&line);
                content.push('\n');
            }
            content.push_str("</pre>");
        } else {
            log::warn!(target: LOG_TARGET, "{MISSING_LICENSE_PREFIX} {license_type}");
            content.push_str(&format!("<p><strong>{MISSING_LICENSE_PREFIX} '{title}'</strong></p>"));
            self.report.missing_licenses.push(license_type.to_string());
        }

        self.render_attribution_table(records);
    }

    fn render_attribution_table(&mut self, records: &[LicenseRecord]) {
        let mut rows = String::new();
        for (index, record) in records.iter().enumerate() {
            log::trace!(target: LOG_TARGET, "{record}");
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                index + 1,
                self.text(&record.licensor),
                self.text(&record.library),
                self.text(&record.description),
                self.text(&record.date),
                self.text(&record.acknowledgements),
            ));
        }

        let content = &mut self.report.content;
        content.push_str(ATTRIBUTION_HEADING);
        content.push_str(TABLE_START);
        content.push_str(TABLE_HEADER);
        content.push_str("</thead><tbody>");
        content.push_str(&rows);
        content.push_str(TABLE_END);
    }
}

fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

//! Content-Security-Policy header construction.
//!
//! The header is assembled from the form values exactly as submitted. No
//! escaping or validation happens here: letting the visitor send a broken
//! or hostile source list and watch what the browser does with it is the
//! point of the demo.

/// Fixed first clause; browsers POST violation reports to this path.
const REPORT_URI_CLAUSE: &str = "report-uri /report;";

/// Requested source-list values per directive, verbatim from the form.
#[derive(Debug, Default, Clone)]
pub struct SourceLists {
    pub default_src: String,
    pub script_src: String,
    pub style_src: String,
    pub img_src: String,
}

impl SourceLists {
    /// Directive names and values in the order they are emitted into the
    /// header (and rendered into the settings form).
    pub fn iter_named(&self) -> [(&'static str, &str); 4] {
        [
            ("default-src", &self.default_src),
            ("script-src", &self.script_src),
            ("style-src", &self.style_src),
            ("img-src", &self.img_src),
        ]
    }
}

/// Build the `Content-Security-Policy` header value.
///
/// Always starts with the `report-uri` clause, so the policy is non-empty
/// even when no directive is filled in; an empty policy that only collects
/// reports is still a valid policy. Directives with empty values are
/// omitted entirely.
pub fn build_csp_header(sources: &SourceLists) -> String {
    let mut clauses = Vec::with_capacity(5);
    clauses.push(REPORT_URI_CLAUSE.to_string());

    for (name, value) in sources.iter_named() {
        if !value.is_empty() {
            clauses.push(format!("{name} {value};"));
        }
    }

    clauses.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sources_yield_bare_report_uri() {
        assert_eq!(
            build_csp_header(&SourceLists::default()),
            "report-uri /report;"
        );
    }

    #[test]
    fn single_directive() {
        let sources = SourceLists {
            default_src: "'self'".to_string(),
            ..Default::default()
        };
        assert_eq!(
            build_csp_header(&sources),
            "report-uri /report; default-src 'self';"
        );
    }

    #[test]
    fn all_directives_in_fixed_order() {
        let sources = SourceLists {
            default_src: "'self'".to_string(),
            script_src: "'unsafe-inline'".to_string(),
            style_src: "https://example.com".to_string(),
            img_src: "*".to_string(),
        };
        assert_eq!(
            build_csp_header(&sources),
            "report-uri /report; default-src 'self'; script-src 'unsafe-inline'; \
             style-src https://example.com; img-src *;"
        );
    }

    #[test]
    fn empty_directives_are_omitted_not_emitted_blank() {
        let sources = SourceLists {
            style_src: "'self'".to_string(),
            img_src: "'none'".to_string(),
            ..Default::default()
        };
        let header = build_csp_header(&sources);
        assert_eq!(header, "report-uri /report; style-src 'self'; img-src 'none';");
        assert!(!header.contains("default-src"));
        assert!(!header.contains("script-src"));
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let sources = SourceLists {
            script_src: "<not a & source \"list\">".to_string(),
            ..Default::default()
        };
        assert_eq!(
            build_csp_header(&sources),
            "report-uri /report; script-src <not a & source \"list\">;"
        );
    }
}

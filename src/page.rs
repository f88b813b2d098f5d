//! HTML rendering for the demo page.
//!
//! The page is one static document with a handful of request-derived
//! values interpolated into it, so it is built with plain string writes
//! rather than a templating engine. Everything user-supplied is escaped
//! for the context it lands in: directive values go into `value="..."`
//! attributes, the echoed policy goes into text content.

use crate::csp::SourceLists;
use crate::state::DemoOrigins;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{self, Write};

/// Per-request values interpolated into the demo page. Built fresh for
/// every request and dropped with the response.
#[derive(Debug, Default)]
pub struct RenderContext {
    pub send_csp: bool,
    pub sources: SourceLists,
    pub csp_header: String,
}

/// One demo block that loads `<slug>.css`, `<slug>.js`, and `img.png`
/// from a single origin. An empty origin makes the URLs path-relative.
struct ResourceSection<'a> {
    class: &'static str,
    slug: &'static str,
    heading: &'static str,
    origin: &'a str,
}

fn resource_sections(origins: &DemoOrigins) -> [ResourceSection<'_>; 5] {
    [
        ResourceSection {
            class: "demo-path-only",
            slug: "pathonly",
            heading: "This section uses css and script loaded by a path relative to the document",
            origin: "",
        },
        ResourceSection {
            class: "demo-same-domain",
            slug: "samedomain",
            heading: "This section uses css and script loaded from the domain \"localhost\"",
            origin: &origins.same_domain,
        },
        ResourceSection {
            class: "demo-subdomain",
            slug: "subdomain",
            heading: "This section uses css and script loaded from the domain \"sub.localhost\"",
            origin: &origins.subdomain,
        },
        ResourceSection {
            class: "demo-foreign-domain",
            slug: "foreigndomain",
            heading: "This section uses css and script loaded from the domain \"unlocalhost\"",
            origin: &origins.foreign_domain,
        },
        ResourceSection {
            class: "demo-foreign-subdomain",
            slug: "foreignsubdomain",
            heading: "This section uses css and script loaded from the domain \"sub.unlocalhost\"",
            origin: &origins.foreign_subdomain,
        },
    ]
}

/// Render the complete demo page.
pub fn render_page(ctx: &RenderContext, origins: &DemoOrigins) -> Result<String, fmt::Error> {
    let sections = resource_sections(origins);
    let mut page = String::with_capacity(8 * 1024);

    page.push_str(
        "<!DOCTYPE html>\n\
         <html>\n\
         \x20 <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <title>Experiment with the Content-Security-Policy header</title>\n\
         \x20   <style>\n\
         \x20     .demo-local .css-testarea {color: red;}\n\
         \x20   </style>\n",
    );
    for section in &sections {
        writeln!(
            page,
            "    <link rel=\"stylesheet\" href=\"{}/assets/{}.css\">",
            section.origin, section.slug
        )?;
    }
    page.push_str("  </head>\n  <body>\n");

    write_settings_form(&mut page, ctx)?;

    page.push_str("    <div class=\"demo-area\">\n");
    if !ctx.csp_header.is_empty() {
        writeln!(
            page,
            "      <p>You got a content security policy: {}</p>",
            encode_text(&ctx.csp_header)
        )?;
    }
    write_inline_sections(&mut page);
    for section in &sections {
        write_resource_section(&mut page, section)?;
    }
    page.push_str("    </div>\n  </body>\n</html>\n");

    Ok(page)
}

/// The settings form round-trips its own state as GET query parameters.
fn write_settings_form(page: &mut String, ctx: &RenderContext) -> fmt::Result {
    page.push_str(
        "    <div class=\"settings-area\">\n\
         \x20     <form method=\"get\">\n",
    );

    let checked = if ctx.send_csp { " checked" } else { "" };
    writeln!(
        page,
        "        <div>\n\
         \x20         <label>\n\
         \x20           Send a Content-Security-Policy header?\n\
         \x20           <input name=\"send-csp\" type=\"checkbox\"{checked}/>\n\
         \x20         </label>\n\
         \x20       </div>"
    )?;

    for (name, value) in ctx.sources.iter_named() {
        writeln!(
            page,
            "        <div>\n\
             \x20         <label>\n\
             \x20           {name}\n\
             \x20           <input type=\"text\" name=\"{name}\" value=\"{}\">\n\
             \x20         </label>\n\
             \x20       </div>",
            encode_double_quoted_attribute(value)
        )?;
    }

    page.push_str(
        "        <button type=\"submit\">go</button>\n\
         \x20     </form>\n\
         \x20   </div>\n",
    );
    Ok(())
}

/// Sections with no external loads: an inline style attribute plus inline
/// script, and a rule carried in the document head.
fn write_inline_sections(page: &mut String) {
    page.push_str(
        "      <div class=\"demo-attributes\">\n\
         \x20       <h3>This section uses an inline style attribute and an inline script block</h3>\n\
         \x20       <div class=\"css-testarea\" style=\"color: red;\">This text should be red</div>\n\
         \x20       <div>\n\
         \x20         <span id=\"demo-attributes-script\">This text has <em>not</em> been altered by javascript</span>\n\
         \x20         <script type=\"text/javascript\">\n\
         \x20           document.getElementById('demo-attributes-script').innerHTML = 'This text <em>has</em> been altered by javascript.'\n\
         \x20         </script>\n\
         \x20       </div>\n\
         \x20     </div>\n\
         \x20     <div class=\"demo-local\">\n\
         \x20       <h3>This section uses css that is rendered in the document head</h3>\n\
         \x20       <div class=\"css-testarea\">This text should be red</div>\n\
         \x20     </div>\n",
    );
}

fn write_resource_section(page: &mut String, section: &ResourceSection<'_>) -> fmt::Result {
    writeln!(
        page,
        "      <div class=\"{class}\">\n\
         \x20       <h3>{heading}</h3>\n\
         \x20       <div class=\"css-testarea\">This text should be red</div>\n\
         \x20       <div>\n\
         \x20         <span id=\"{class}-script\">This text has <em>not</em> been altered by javascript</span>\n\
         \x20         <script type=\"text/javascript\" src=\"{origin}/assets/{slug}.js\"></script>\n\
         \x20       </div>\n\
         \x20       <div>\n\
         \x20         An image of a check mark with a red frame should be displayed here:\n\
         \x20         <img src=\"{origin}/assets/img.png\" alt=\"check mark\"/>\n\
         \x20       </div>\n\
         \x20     </div>",
        class = section.class,
        heading = section.heading,
        origin = section.origin,
        slug = section.slug,
    )
}

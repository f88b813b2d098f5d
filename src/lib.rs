//! Interactive playground for the `Content-Security-Policy` header.
//!
//! Serves a single demo page that embeds the same stylesheet, script, and
//! image from several origins (path-relative, same-domain, subdomain, and
//! two foreign domains) plus inline variants, and lets the visitor compose
//! a CSP header through a form to watch which of those loads the browser
//! blocks. Violation reports the browser POSTs back are logged verbatim.

pub mod app;
pub mod cli;
pub mod config;
pub mod csp;
pub mod logging;
pub mod page;
pub mod state;
pub mod web;

//! HTML documents
//!
//! A document pairs head content with a body and serializes the full
//! doctype/html/head/body skeleton. The body is rendered first, into its
//! own printer, so that every style it registers is in the stylesheet
//! injected into `<head>`.

use crate::element::tag;
use crate::node::{raw, Html, HtmlRaw};
use crate::printer::Printer;

/// A complete HTML document.
pub struct HtmlDocument<H, B> {
    head: H,
    body: B,
}

/// Create a document from head content and a body tree.
pub fn document<H: Html, B: Html>(head: H, body: B) -> HtmlDocument<H, B> {
    HtmlDocument { head, body }
}

impl<H: Html, B: Html> Html for HtmlDocument<H, B> {
    fn render(&self, printer: &mut Printer) {
        // Body first: the stylesheet must be complete before the head is
        // written. The forked printer carries the session registry so
        // class numbering stays continuous.
        let mut body_printer = printer.fork();
        self.body.render(&mut body_printer);
        let stylesheet = body_printer.stylesheet();
        let body_bytes = std::mem::take(&mut body_printer.bytes);
        printer.adopt(body_printer);

        printer.push_str("<!doctype html>");
        tag(
            "html",
            (
                tag("head", (&self.head, tag("style", raw(stylesheet)))),
                tag("body", HtmlRaw::from_bytes(body_bytes)),
            ),
        )
        .render(printer);
    }
}

//! Tag constructors
//!
//! One function per standard HTML tag. Container tags take their content;
//! text tags take a string; void tags take nothing and can never hold
//! children.

use weft_html::{tag, Html, HtmlElement, HtmlEmpty, HtmlText};

macro_rules! container_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("The `<", stringify!($name), ">` element.")]
            pub fn $name<C: Html>(content: C) -> HtmlElement<C> {
                tag(stringify!($name), content)
            }
        )*
    };
}

macro_rules! text_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("The `<", stringify!($name), ">` element, which holds text.")]
            pub fn $name(content: impl Into<String>) -> HtmlElement<HtmlText> {
                tag(stringify!($name), weft_html::text(content))
            }
        )*
    };
}

macro_rules! void_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("The `<", stringify!($name), ">` void element.")]
            pub fn $name() -> HtmlElement<HtmlEmpty> {
                tag(stringify!($name), HtmlEmpty)
            }
        )*
    };
}

// Document structure
container_tags!(html, head, body, main, header, footer, nav, article, section, aside);

// Grouping content
container_tags!(div, p, blockquote, figure, figcaption, pre, ul, ol, li, dl, dt, dd, address);

// Headings
container_tags!(h1, h2, h3, h4, h5, h6);

// Text-level semantics
container_tags!(a, span, strong, em, b, i, small, cite, q, code, time, sub, sup, mark, kbd, samp);

// Tables
container_tags!(table, caption, thead, tbody, tfoot, tr, th, td);

// Forms
container_tags!(form, fieldset, legend, label, button, select, optgroup, datalist, output);

// Embedded and scripting content
container_tags!(picture, video, audio, canvas, iframe, script, style, noscript);

// Tags that hold text content
text_tags!(title, option, textarea);

// Void elements
void_tags!(area, base, br, col, command, embed, hr, img, input, keygen, link, meta, param, source, track, wbr);

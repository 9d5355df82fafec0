//! Static HTML shell and placeholder home page.

pub const APP_TITLE: &str = "Book Tracker";

const STYLESHEET_HREF: &str = "/styles.css";

/// Root document shared by all pages, wrapping `body`.
pub fn render_document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{APP_TITLE}</title>\n\
         <link rel=\"stylesheet\" href=\"{STYLESHEET_HREF}\">\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

// Placeholder until the book list lands.
pub fn render_home_page() -> String {
    render_document(&format!(
        "<main>\n<h1>{APP_TITLE}</h1>\n<p>Coming soon.</p>\n</main>"
    ))
}

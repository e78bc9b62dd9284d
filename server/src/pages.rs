//! Server-rendered pages. Rendering is a pure function from data to an
//! HTML string; every interpolated value goes through [`escape`].

/// Replace the characters that would otherwise terminate markup.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

pub fn base_page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{title}</title></head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <pre>{content}</pre>\n\
         <p><a href=\"/\">Back to all stories</a></p>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        content = escape(content),
    )
}

pub fn index(stories: &[String]) -> String {
    let mut listing = String::new();

    for name in stories {
        let name = escape(name);
        listing.push_str(&format!(
            "<li><a href=\"/stories/view?filename={name}\">{name}</a></li>\n"
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Story Fun</title></head>\n\
         <body>\n\
         <h1>Story Fun</h1>\n\
         <form action=\"/stories\" method=\"post\">\n\
         <textarea name=\"story\" rows=\"8\" cols=\"60\"></textarea><br>\n\
         <button type=\"submit\">Upload story</button>\n\
         </form>\n\
         <form action=\"/random_story\" method=\"get\">\n\
         <input type=\"text\" name=\"filter\" placeholder=\"Filter by name\">\n\
         <button type=\"submit\">Random story</button>\n\
         </form>\n\
         <h2>Stories</h2>\n\
         <ul>\n{listing}</ul>\n\
         </body>\n\
         </html>\n"
    )
}

pub fn upload_success(filename: &str) -> String {
    let filename = escape(filename);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Story uploaded</title></head>\n\
         <body>\n\
         <h1>Story uploaded</h1>\n\
         <p>Saved as <a href=\"/stories/view?filename={filename}\">{filename}</a></p>\n\
         <p><a href=\"/\">Back to all stories</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::{base_page, escape, index};

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_base_page_escapes_content() {
        let page = base_page("Title", "<script>alert(1)</script>");

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_index_lists_stories() {
        let page = index(&["story_abc.txt".to_string()]);

        assert!(page.contains("/stories/view?filename=story_abc.txt"));
        assert!(page.contains("name=\"story\""));
        assert!(page.contains("name=\"filter\""));
    }
}

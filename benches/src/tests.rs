use crate::context::{Blog, Context};
use crate::BLOG;

#[test]
fn blog_renders() {
    let ctx = Context {
        blog: Blog {
            id: String::from("b1"),
            name: String::from("Hello"),
            user_name: String::from("ann"),
            summary: String::from("  a <b> & c  "),
            html_content: String::from("<p>x</p>"),
            tags: vec![String::from("rust"), String::from("web")],
            created_at: 1_709_629_622.0,
        },
    };
    let result = quill::Engine::new().compile(BLOG).unwrap().render(&ctx).unwrap();
    assert!(result.contains(r#"<a href="/blog/b1">Hello</a>"#));
    assert!(result.contains("ann at 2024-03-05 09:07:02"));
    assert!(result.contains("a &lt;b&gt; &amp; c"));
    assert!(result.contains(r#"<div class="content"><p>x</p></div>"#));
    assert!(result.contains("rust,web (2)"));
}

use gemtext::{Line, Response, Transcoder};
use pretty_assertions::assert_eq;

static CAPSULE: &str = "\
# Gemini capsule
## Links
=> gemini://example.org/ Example <site>
=> gemini://example.org/raw
> Tom & Jerry's quote
* first
* second
Back to \"text\"
```ascii art
<=>
* bullet in art
```
### Done";

/// Cut the `<body>` contents out of a document.
fn body(html: &str) -> &str {
    let start = html.find("<body>").expect("no <body>") + "<body>".len();
    let end = html.rfind("</body>").expect("no </body>");

    &html[start..end]
}

#[test]
fn transcodes_a_whole_capsule() {
    let html = gemtext::transcode(CAPSULE);

    assert_eq!(
        body(&html),
        "<h1># Gemini capsule</h1>\n\
         <h2>## Links</h2>\n\
         =&gt; <a href=\"gemini://example.org/\">Example &lt;site&gt;</a><br>\n\
         =&gt; <a href=\"gemini://example.org/raw\">gemini://example.org/raw</a><br>\n\
         <blockquote>&gt; Tom &amp; Jerry&#x27;s quote</blockquote>\n\
         <ul><li> first</li><li> second</li></ul>\n\
         Back to &quot;text&quot;<br>\n\
         <pre>&lt;=&gt;\n\
         <ul><li> bullet in art</li></pre></ul>\n\
         <h3>### Done</h3>\n"
    );
}

#[test]
fn document_shell() {
    let html = gemtext::transcode("");

    assert!(html.starts_with("<html><head><meta charset=\"utf-8\" /><style>"));
    assert!(html.contains(gemtext::STYLESHEET));
    assert!(html.ends_with("</body></html>"));
    assert_eq!(body(&html), "<br>\n");
    assert_eq!(html.matches("<html>").count(), 1);
    assert_eq!(html.matches("<body>").count(), 1);
}

#[test]
fn script_tags_never_survive_in_content() {
    let source = "<script>1</script>\n# <script>\n> <script>\n* <script>\n```\n<script>\n```\n=> x <script>";
    let html = gemtext::transcode(source);

    assert!(!body(&html).contains("<script>"));
    assert_eq!(body(&html).matches("&lt;script&gt;").count(), 6);
}

#[test]
fn heading_levels_follow_hash_count() {
    for level in 1..=6 {
        let source = format!("{} Heading", "#".repeat(level));
        let html = gemtext::transcode(&source);

        assert_eq!(
            body(&html),
            format!("<h{0}>{1}</h{0}>\n", level, source)
        );
    }
}

#[test]
fn fence_flips_exactly_twice() {
    let html = gemtext::transcode("```\nraw <tag>\n```");

    assert_eq!(body(&html), "<pre>raw &lt;tag&gt;\n</pre>");
    assert_eq!(html.matches("<pre>").count(), 1);
    assert_eq!(html.matches("</pre>").count(), 1);
}

#[test]
fn transcoding_is_deterministic() {
    let transcoder = Transcoder::new().close_unterminated(true);

    assert_eq!(transcoder.transcode(CAPSULE), transcoder.transcode(CAPSULE));
    assert_eq!(gemtext::transcode(CAPSULE), gemtext::transcode(CAPSULE));
}

#[test]
fn malformed_input_degrades_to_text() {
    let html = gemtext::transcode("``\n=\n= > nope\n\u{0}\u{7f}\n\n");

    assert_eq!(
        body(&html),
        "``<br>\n=<br>\n= &gt; nope<br>\n\u{0}\u{7f}<br>\n<br>\n<br>\n"
    );
}

#[test]
fn strict_transcoder_closes_everything() {
    let transcoder = Transcoder::new()
        .close_unterminated(true)
        .escape_link_targets(true);

    let html = transcoder.transcode("```\n* open\n=> \"><script> label");

    assert_eq!(
        body(&html),
        "<pre><ul><li> open</li></ul>\n=&gt; &quot;&gt;&lt;script&gt; label\n</pre>"
    );

    let html = transcoder.transcode("=> \"><script> label");

    assert_eq!(
        body(&html),
        "=&gt; <a href=\"&quot;&gt;&lt;script&gt;\">label</a><br>\n"
    );
}

#[test]
fn lines_can_be_classified_on_their_own() {
    let kinds: Vec<&str> = CAPSULE
        .lines()
        .map(|line| match Line::parse(line) {
            Line::Fence => "fence",
            Line::ListItem(_) => "item",
            Line::Heading { .. } => "heading",
            Line::Quote(_) => "quote",
            Line::Link(_) => "link",
            Line::Text(_) => "text",
        })
        .collect();

    assert_eq!(
        kinds,
        [
            "heading", "heading", "link", "link", "quote", "item", "item", "text", "fence",
            "text", "item", "fence", "heading",
        ]
    );
}

#[test]
fn response_carries_the_document() {
    let response = Response::from_gemtext(CAPSULE);

    assert_eq!(response.mime, gemtext::MIME);
    assert_eq!(response.body, gemtext::transcode(CAPSULE).into_bytes());
}

#[test]
fn concurrent_transcoding() {
    let transcoder = Transcoder::new();
    let expected = transcoder.transcode(CAPSULE);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || transcoder.transcode(CAPSULE)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

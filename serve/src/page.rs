//! HTML for the single page: topic form plus, after a POST, the three results.

use triptych::PipelineOutput;

/// What a POST produced; `None` renders the bare form.
pub(crate) struct PageResult<'a> {
    pub(crate) topic: &'a str,
    pub(crate) output: &'a PipelineOutput,
}

/// Escapes text for HTML element content and double-quoted attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn section(title: &str, body: &str) -> String {
    format!(
        "<section class=\"result\">\n<h2>{}</h2>\n<div class=\"result-body\">{}</div>\n</section>\n",
        title,
        escape_html(body)
    )
}

fn layout(main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Triptych research assistant</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
<h1>Research assistant</h1>
{}</main>
</body>
</html>
"#,
        main
    )
}

fn form(topic: &str) -> String {
    format!(
        r#"<form method="post" action="/">
<label for="topic">Topic</label>
<input id="topic" name="topic" type="text" required value="{}">
<button type="submit">Research</button>
</form>
"#,
        escape_html(topic)
    )
}

/// The form page, with results when `result` is set.
pub(crate) fn render(result: Option<&PageResult<'_>>) -> String {
    let mut main = form(result.map(|r| r.topic).unwrap_or_default());
    if let Some(r) = result {
        main.push_str(&format!(
            "<p class=\"topic\">Topic: <strong>{}</strong></p>\n",
            escape_html(r.topic)
        ));
        main.push_str(&section("Research", &r.output.research));
        main.push_str(&section("Summary", &r.output.summary));
        main.push_str(&section("Feedback", &r.output.feedback));
    }
    layout(&main)
}

/// Page shown with a 4xx/5xx status.
pub(crate) fn render_error(message: &str) -> String {
    let main = format!(
        "{}<p class=\"error\">{}</p>\n",
        form(""),
        escape_html(message)
    );
    layout(&main)
}

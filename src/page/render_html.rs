use axum::http::StatusCode;

use crate::util::string::StringUtils;

use super::markdown::render_markdown;
use super::{AnswerBlock, PageView};

pub const ANSWER_LABEL: &str = "🧠 Answer:";
pub const ERROR_PREFIX: &str = "⚠️ Ollama Error: ";

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>PDF Question Answering</title>
    <style>
        body {
            font-family: sans-serif;
            max-width: 900px;
            margin: 20px auto;
            line-height: 1.6;
        }
        textarea {
            width: 100%;
            height: 300px;
            font-family: monospace;
        }
        input[type=text] {
            width: 100%;
        }
        .error {
            background: #fdecea;
            color: #8a1c12;
            padding: 10px;
        }
        .spinner {
            display: inline-block;
            width: 12px;
            height: 12px;
            border: 2px solid #ccc;
            border-top-color: #333;
            border-radius: 50%;
            animation: spin 1s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
    </style>
</head>
<body>
    <h1>📄 PDF Question Answering with Local AI (Ollama)</h1>
"#;

const PAGE_TAIL: &str = "</body></html>\n";

/// Render a finished render cycle as a full HTML page.
pub fn render_page(view: &PageView, model: &str) -> String {
    let mut html = String::from(PAGE_HEAD);

    html.push_str(&render_form(view, model));

    for document in &view.documents {
        html.push_str(&format!(
            "    <h3>📘 Extracted from {}</h3>\n    <label>Text</label>\n    <textarea readonly>{}</textarea>\n",
            StringUtils::escape_html(&document.filename),
            StringUtils::escape_html(&document.text),
        ));
    }

    match &view.answer {
        Some(AnswerBlock::Answer(answer)) => {
            let body = render_markdown(&format!("**{}** {}", ANSWER_LABEL, answer));
            html.push_str(&format!("    <div class=\"answer\">{}</div>\n", body));
        }
        Some(AnswerBlock::Error(message)) => {
            html.push_str(&format!(
                "    <div class=\"error\">{}</div>\n",
                StringUtils::escape_html(message)
            ));
        }
        None => {}
    }

    html.push_str(PAGE_TAIL);
    html
}

fn render_form(view: &PageView, model: &str) -> String {
    let question_hint = if view.show_question {
        ""
    } else {
        " placeholder=\"Upload at least one PDF to get an answer\""
    };

    format!(
        r#"    <form method="post" action="/" enctype="multipart/form-data"
          onsubmit="document.getElementById('busy').hidden = false">
        <label for="files">Upload PDF(s)</label>
        <input type="file" id="files" name="files" accept=".pdf,application/pdf" multiple>
        <label for="question">❓ Ask something about the PDF:</label>
        <input type="text" id="question" name="question" value="{question}"{hint}>
        <button type="submit">Submit</button>
    </form>
    <p id="busy" hidden><span class="spinner"></span> Thinking locally with {model}...</p>
"#,
        question = StringUtils::escape_html(&view.question),
        hint = question_hint,
        model = StringUtils::escape_html(model),
    )
}

/// Page shown when a render cycle fails outright.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(&format!(
        "    <h2>{}</h2>\n    <pre class=\"error\">{}</pre>\n    <p><a href=\"/\">Back</a></p>\n",
        status,
        StringUtils::escape_html(message)
    ));
    html.push_str(PAGE_TAIL);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ExtractedDocument;

    #[test]
    fn test_empty_page_has_form_and_no_blocks() {
        let html = render_page(&PageView::default(), "mistral");
        assert!(html.contains("enctype=\"multipart/form-data\""));
        assert!(html.contains("Thinking locally with mistral..."));
        assert!(!html.contains("Extracted from"));
        assert!(!html.contains(ANSWER_LABEL));
    }

    #[test]
    fn test_documents_are_escaped() {
        let view = PageView {
            documents: vec![ExtractedDocument {
                filename: "<x>.pdf".to_string(),
                text: "a < b & c".to_string(),
            }],
            show_question: true,
            ..PageView::default()
        };
        let html = render_page(&view, "mistral");
        assert!(html.contains("📘 Extracted from &lt;x&gt;.pdf"));
        assert!(html.contains("<textarea readonly>a &lt; b &amp; c</textarea>"));
        assert!(!html.contains("placeholder="));
    }

    #[test]
    fn test_answer_and_error_blocks() {
        let mut view = PageView {
            show_question: true,
            question: "q".to_string(),
            answer: Some(AnswerBlock::Answer("It is *short*.\n\n<b>raw</b>".to_string())),
            ..PageView::default()
        };
        let html = render_page(&view, "mistral");
        assert!(html.contains("<p><strong>🧠 Answer:</strong> It is <em>short</em>.</p>"));
        assert!(html.contains("&lt;b&gt;raw&lt;/b&gt;"));
        assert!(html.contains("value=\"q\""));

        view.answer = Some(AnswerBlock::Error(format!("{}connection refused", ERROR_PREFIX)));
        let html = render_page(&view, "mistral");
        assert!(html.contains("<div class=\"error\">⚠️ Ollama Error: connection refused</div>"));
    }

    #[test]
    fn test_error_page() {
        let html = render_error_page(StatusCode::INTERNAL_SERVER_ERROR, "bad <pdf>");
        assert!(html.contains("500 Internal Server Error"));
        assert!(html.contains("bad &lt;pdf&gt;"));
    }
}

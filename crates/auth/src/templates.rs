//! HTML for the development login page.

/// Escape HTML special characters to prevent XSS.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate the login page that asks for a nickname.
pub fn login_page(action: &str, return_to: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Sign in to Storybook (DEV ONLY)</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            max-width: 400px;
            margin: 100px auto;
            padding: 20px;
        }}
        .warning {{
            background: #fff3cd;
            border: 1px solid #ffc107;
            padding: 15px;
            border-radius: 8px;
            margin-bottom: 20px;
        }}
        form {{
            background: #f8f9fa;
            padding: 20px;
            border-radius: 8px;
        }}
        label {{
            display: block;
            margin-bottom: 5px;
        }}
        input[type="text"] {{
            width: 100%;
            padding: 8px;
            margin-bottom: 15px;
            box-sizing: border-box;
        }}
    </style>
</head>
<body>
    <div class="warning">
        <strong>Development identity provider.</strong>
        Anyone can sign in with any nickname.
    </div>
    <form method="GET" action="{action}">
        <label for="nickname">Nickname</label>
        <input type="text" id="nickname" name="nickname" required />
        <input type="hidden" name="return_to" value="{return_to}" />
        <button type="submit">Sign in</button>
    </form>
</body>
</html>"#,
        action = html_escape(action),
        return_to = html_escape(return_to),
    )
}

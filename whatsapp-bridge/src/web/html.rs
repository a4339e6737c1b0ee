//! Admin setup pages.

use relay_core::Credentials;

/// Escapes a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Setup form posting to `./admin_ui_2`. Fields are prefilled from `credentials` when editing an
/// existing integration; `warning` is shown above the submit button.
pub fn admin_ui_html(
    name: &str,
    credentials: &Credentials,
    return_url: &str,
    warning: Option<&str>,
) -> String {
    let warning = warning
        .map(|w| format!("<p class=\"warning\">{}</p>", escape_attr(w)))
        .unwrap_or_default();

    format!(
        r#"<html><body>
      <form method="post" action="./admin_ui_2">
        Name:
          <input type="text" name="name" value="{name}"><br>
        JWT:
          <input type="text" name="jwt" value="{jwt}"><br>
        WhatsAppNumber:
          <input type="text" name="whatsappNumber" value="{number}"><br>
        <input type="hidden" name="return_url" value="{return_url}">
        {warning}
        <input type="submit">
      </form>
    </body></html>"#,
        name = escape_attr(or_placeholder(name, "Name")),
        jwt = escape_attr(or_placeholder(&credentials.jwt, "Enter your JWT")),
        number = escape_attr(or_placeholder(
            &credentials.whatsapp_number,
            "Enter your WhatsApp number"
        )),
        return_url = escape_attr(return_url),
        warning = warning,
    )
}

/// Auto-submitting form that hands `name` and the serialized credential bundle back to the
/// platform at `return_url`.
pub fn finish_html(return_url: &str, name: &str, metadata: &str) -> String {
    format!(
        r#"<html><body>
      <form id="finish" method="post" action="{return_url}">
        <input type="hidden" name="name" value="{name}">
        <input type="hidden" name="metadata" value="{metadata}">
      </form>
      <script type="text/javascript">
        document.forms['finish'].submit();
      </script>
    </body></html>"#,
        return_url = escape_attr(return_url),
        name = escape_attr(name),
        metadata = escape_attr(metadata),
    )
}

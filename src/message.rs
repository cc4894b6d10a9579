//! Violation-message templating.

/// Render a message template against a label and an optional parameter.
///
/// The first occurrence of the literal `%l` is replaced with `label`; the
/// first occurrence of `%p` is replaced with the parameter only when one is
/// present and non-empty. There is no recursive substitution and no HTML
/// escaping: templates legitimately carry markup (such as emphasis tags
/// around the label placeholder) and it is preserved verbatim.
pub fn render_message(template: &str, label: &str, parameter: Option<&str>) -> String {
    let mut message = template.replacen("%l", label, 1);

    if let Some(parameter) = parameter.filter(|p| !p.is_empty()) {
        message = message.replacen("%p", parameter, 1);
    }

    message
}

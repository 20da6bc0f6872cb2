//! Small text formatting helpers for templates.

/// Turns a snake_case bag key into a human label: "github_url" → "Github Url".
pub fn prettify_key(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_key() {
        assert_eq!(prettify_key("github_url"), "Github Url");
        assert_eq!(prettify_key("technologies"), "Technologies");
        assert_eq!(prettify_key("live_DEMO_url"), "Live Demo Url");
        assert_eq!(prettify_key(""), "");
    }
}

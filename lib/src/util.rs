use std::path::{Component, Path};

/// Convert spaces to hyphens. Remove characters that aren't alphanumerics,
/// underscores, or hyphens. Convert to lowercase. Also strip leading and
/// trailing whitespace.
pub fn slugify(string: &str) -> String {
    let mut output = String::with_capacity(string.len());

    let mut need_dash = false;
    for ch in string.chars() {
        for b in deunicode::deunicode_char(ch).unwrap_or("-").bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => {
                    if need_dash {
                        output.push('-');
                        need_dash = false;
                    }

                    output.push(b.to_ascii_lowercase() as char);
                }
                _ => need_dash = !output.is_empty(),
            }
        }
    }

    output
}

/// Slugifies every normal component of the relative path `path` and joins
/// them with `/`. Components that slugify to nothing are dropped.
///
/// ```
/// use hueline::util::slugify_path;
///
/// assert_eq!(slugify_path("Blog/2024/Hello World".as_ref()), "blog/2024/hello-world");
/// assert_eq!(slugify_path("./Notes/Ünïcode".as_ref()), "notes/unicode");
/// assert_eq!(slugify_path("!!!/post".as_ref()), "post");
/// ```
pub fn slugify_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(slugify(&s.to_string_lossy())),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

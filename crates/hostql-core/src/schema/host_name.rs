/// Turns a host field or method name into the name queries use.
///
/// snake_case becomes camelCase, and the first letter is lowercased unless
/// the second is uppercase (so acronyms such as `ID` or `URLs` survive).
///
/// ```
/// use hostql_core::schema::format_host_name;
///
/// assert_eq!(format_host_name("first_name"), "firstName");
/// assert_eq!(format_host_name("Name"), "name");
/// assert_eq!(format_host_name("ID"), "ID");
/// ```
pub fn format_host_name(host_name: &str) -> String {
    let leading = host_name.len() - host_name.trim_start_matches('_').len();
    let (prefix, rest) = host_name.split_at(leading);

    let mut camel = String::with_capacity(host_name.len());
    camel.push_str(prefix);
    for (index, part) in rest.split('_').filter(|part| !part.is_empty()).enumerate() {
        if index == 0 {
            camel.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }

    let mut chars = camel.chars();
    match (chars.next(), chars.next()) {
        (None, _) => camel,
        (Some(first), None) => first.to_lowercase().collect(),
        (Some(_), Some(second)) if second.is_uppercase() => camel,
        (Some(first), Some(_)) => {
            let mut formatted: String = first.to_lowercase().collect();
            formatted.push_str(&camel[first.len_utf8()..]);
            formatted
        },
    }
}

/// Strips the resolver prefix from a method name. Methods without the
/// prefix, or whose remainder does not start with a letter, are not
/// resolvers.
pub(crate) fn resolver_name(method_name: &str) -> Option<&str> {
    let rest = method_name.strip_prefix("resolve_")?;
    rest.starts_with(|c: char| c.is_ascii_alphabetic())
        .then_some(rest)
}

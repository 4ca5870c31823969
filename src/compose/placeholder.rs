//! Template placeholder substitution.
//!
//! A template references substitution points as `{token}`. Substitution is a
//! single pass and never recursive: a replacement value is spliced in
//! verbatim and not re-scanned, so user-controlled text cannot inject
//! further placeholders. Tokens the lookup does not resolve stay literal,
//! as do unclosed braces.

/// Replace every `{token}` in `template` with the value `lookup` returns
/// for it, leaving unresolved tokens as-is.
pub fn substitute<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }

        if !closed {
            result.push('{');
            result.push_str(&token);
        } else if let Some(value) = lookup(&token) {
            result.push_str(&value);
        } else {
            result.push('{');
            result.push_str(&token);
            result.push('}');
        }
    }

    result
}

/// Positional substitution for message templates: `{0}`, `{1}`, ... resolve
/// by index into `args`; everything else is left for later passes.
pub fn substitute_positional(template: &str, args: &[String]) -> String {
    substitute(template, |token| {
        token
            .parse::<usize>()
            .ok()
            .and_then(|idx| args.get(idx).cloned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn original(value: &str) -> impl Fn(&str) -> Option<String> + '_ {
        move |token| (token == "original").then(|| value.to_string())
    }

    #[test]
    fn replaces_known_token() {
        assert_eq!(
            substitute("<{original}>", original("Iron Ingot")),
            "<Iron Ingot>"
        );
    }

    #[test]
    fn unresolved_token_stays_literal() {
        assert_eq!(substitute("hi {nope}", original("x")), "hi {nope}");
    }

    #[test]
    fn unclosed_brace_stays_literal() {
        assert_eq!(substitute("hi {original", original("x")), "hi {original");
    }

    #[test]
    fn empty_braces_stay_literal() {
        assert_eq!(substitute("a {} b", original("x")), "a {} b");
    }

    #[test]
    fn substitution_is_not_recursive() {
        // The replacement contains a placeholder-looking token; one pass
        // must not expand it.
        let out = substitute("{original}", original("{original}"));
        assert_eq!(out, "{original}");

        let out = substitute("{a}", |t| (t == "a").then(|| "{b}".to_string()));
        assert_eq!(out, "{b}");
    }

    #[test]
    fn repeated_token_replaced_each_time() {
        assert_eq!(substitute("{x} and {x}", |t| (t == "x").then(|| "A".into())), "A and A");
    }

    #[test]
    fn positional_arguments_by_index() {
        let args = vec!["Ada".to_string(), "3".to_string()];
        assert_eq!(
            substitute_positional("Hello, {0}! You have {1} items.", &args),
            "Hello, Ada! You have 3 items."
        );
    }

    #[test]
    fn positional_out_of_range_stays_literal() {
        assert_eq!(substitute_positional("{0} {1}", &["a".to_string()]), "a {1}");
    }

    #[test]
    fn positional_ignores_named_tokens() {
        assert_eq!(substitute_positional("{player} {0}", &["x".to_string()]), "{player} x");
    }
}

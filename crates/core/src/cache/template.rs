//! Cache key templates with named placeholders.
//!
//! A template such as `service-{service_id}-template-{template_id}-versions`
//! is resolved against the arguments of a call. Arguments may be supplied
//! positionally (bound through the declared parameter names) or by keyword;
//! both styles produce the same key for the same logical values.

use std::collections::BTreeMap;
use std::fmt;

use super::KeyResolutionError;

/// Arguments of a call that a key template is resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArgs {
    declared: Vec<String>,
    positional: Vec<String>,
    keyword: BTreeMap<String, String>,
}

impl CallArgs {
    /// Creates call arguments for a function with the given parameter names.
    pub fn new<I, S>(declared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared: declared.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl ToString) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Sets a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.keyword.insert(name.into(), value.to_string());
        self
    }

    /// Looks up the value bound to `name`, positional binding first.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.declared
            .iter()
            .position(|declared| declared == name)
            .and_then(|index| self.positional.get(index))
            .or_else(|| self.keyword.get(name))
            .map(String::as_str)
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed cache key template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl KeyTemplate {
    /// Parses a template. `{name}` marks a placeholder; `*` and `?` are kept
    /// literally so pattern templates resolve to globs.
    pub fn new(source: impl Into<String>) -> Result<Self, KeyResolutionError> {
        let source = source.into();
        let malformed = |reason: &str| KeyResolutionError::MalformedTemplate {
            template: source.clone(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(malformed("nested '{'")),
                            _ => name.push(c),
                        }
                    }
                    if !closed {
                        return Err(malformed("unclosed '{'"));
                    }
                    let name = name.trim().to_string();
                    if name.is_empty() {
                        return Err(malformed("empty placeholder"));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => return Err(malformed("unmatched '}'")),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { source, segments })
    }

    /// Returns the template text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns placeholder names in the order they appear.
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Resolves the template into a concrete key (or glob, for pattern
    /// templates). Fails naming the first placeholder with no bound value.
    pub fn resolve(&self, args: &CallArgs) -> Result<String, KeyResolutionError> {
        let mut key = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => key.push_str(text),
                Segment::Placeholder(name) => {
                    let value =
                        args.lookup(name)
                            .ok_or_else(|| KeyResolutionError::MissingPlaceholder {
                                template: self.source.clone(),
                                name: name.clone(),
                            })?;
                    key.push_str(value);
                }
            }
        }
        Ok(key)
    }
}

impl fmt::Display for KeyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_template() -> KeyTemplate {
        KeyTemplate::new("service-{service_id}-template-{template_id}-version-{version}").unwrap()
    }

    fn declared() -> CallArgs {
        CallArgs::new(["service_id", "template_id", "version"])
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            version_template().placeholders(),
            vec!["service_id", "template_id", "version"]
        );
    }

    #[test]
    fn test_positional_binding() {
        let key = version_template()
            .resolve(&declared().arg("s1").arg("t1").arg(3))
            .unwrap();
        assert_eq!(key, "service-s1-template-t1-version-3");
    }

    #[test]
    fn test_positional_and_keyword_styles_agree() {
        let template = version_template();
        let positional = template
            .resolve(&declared().arg("s1").arg("t1").arg(3))
            .unwrap();
        let keyword = template
            .resolve(
                &declared()
                    .kwarg("version", 3)
                    .kwarg("template_id", "t1")
                    .kwarg("service_id", "s1"),
            )
            .unwrap();
        let mixed = template
            .resolve(&declared().arg("s1").kwarg("version", 3).kwarg("template_id", "t1"))
            .unwrap();

        assert_eq!(positional, keyword);
        assert_eq!(positional, mixed);
    }

    #[test]
    fn test_missing_placeholder_fails_loudly() {
        let err = version_template()
            .resolve(&declared().arg("s1").arg("t1"))
            .unwrap_err();
        assert_eq!(
            err,
            KeyResolutionError::MissingPlaceholder {
                template: "service-{service_id}-template-{template_id}-version-{version}"
                    .to_string(),
                name: "version".to_string(),
            }
        );
    }

    #[test]
    fn test_keyword_only_without_declared_names() {
        let template = KeyTemplate::new("service-{service_id}-templates").unwrap();
        let key = template
            .resolve(&CallArgs::default().kwarg("service_id", "abc"))
            .unwrap();
        assert_eq!(key, "service-abc-templates");
    }

    #[test]
    fn test_pattern_template_keeps_wildcards() {
        let template = KeyTemplate::new("service-*-template-{template_id}-versions").unwrap();
        let pattern = template
            .resolve(&CallArgs::new(["template_id"]).arg("t9"))
            .unwrap();
        assert_eq!(pattern, "service-*-template-t9-versions");
    }

    #[test]
    fn test_template_without_placeholders() {
        let template = KeyTemplate::new("letter-rates").unwrap();
        assert!(template.placeholders().is_empty());
        assert_eq!(template.resolve(&CallArgs::default()).unwrap(), "letter-rates");
    }

    #[test]
    fn test_malformed_templates() {
        for source in ["service-{service_id", "service-{}", "service-}", "a-{b{c}}"] {
            let err = KeyTemplate::new(source).unwrap_err();
            assert!(
                matches!(err, KeyResolutionError::MalformedTemplate { .. }),
                "{source} should be malformed"
            );
        }
    }
}

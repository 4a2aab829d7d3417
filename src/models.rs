use serde::{Deserialize, Serialize};

/// One (path, method) operation extracted from the OpenAPI document.
///
/// Immutable after the document loader produces it; the list of
/// descriptors is built once at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// HTTP method as written in the document (use sites are case-insensitive)
    pub method: String,
    /// Path template with `{name}` placeholders intact (e.g. "/users/{id}")
    pub path: String,
    /// Operation summary, falling back to description, falling back to ""
    pub description: String,
    /// Path parameter names in document order; duplicates pass through
    pub param_names: Vec<String>,
}

impl EndpointDescriptor {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        EndpointDescriptor {
            method: method.into(),
            path: path.into(),
            description: String::new(),
            param_names: Vec::new(),
        }
    }

    /// Method in display form
    pub fn method_upper(&self) -> String {
        self.method.to_uppercase()
    }

    /// Substitutes parameter values into the path template.
    ///
    /// Every `{name}` occurrence of each declared parameter is replaced
    /// with the value at the same position in `values`, or the empty
    /// string when no value was entered. Placeholders the document never
    /// declared as path parameters are left untouched - the document is
    /// trusted, not verified.
    pub fn resolve_path(&self, values: &[String]) -> String {
        let mut resolved = self.path.clone();
        for (i, name) in self.param_names.iter().enumerate() {
            let value = values.get(i).map(String::as_str).unwrap_or("");
            let pattern = format!("{{{}}}", name);
            resolved = resolved.replace(&pattern, value);
        }
        resolved
    }
}

/// Lifecycle of one invocation unit
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum InvocationStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// What one invocation produced, success or failure alike.
///
/// Any received response - 4xx and 5xx included - carries its real status
/// code and raw body. Only a transport-level failure leaves `status_code`
/// empty, with a synthesized message as the body.
#[derive(Clone, Debug, PartialEq)]
pub struct InvocationOutcome {
    pub status_code: Option<u16>,
    pub body: String,
    pub time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(path: &str, params: &[&str]) -> EndpointDescriptor {
        EndpointDescriptor {
            method: "get".into(),
            path: path.into(),
            description: String::new(),
            param_names: params.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn resolve_substitutes_single_placeholder() {
        let ep = descriptor("/users/{id}", &["id"]);
        assert_eq!(ep.resolve_path(&["7".into()]), "/users/7");
    }

    #[test]
    fn resolve_replaces_every_occurrence_of_a_repeated_name() {
        let ep = descriptor("/pair/{id}/{id}/{id}", &["id"]);
        assert_eq!(ep.resolve_path(&["42".into()]), "/pair/42/42/42");
    }

    #[test]
    fn resolve_uses_empty_string_for_missing_values() {
        let ep = descriptor("/users/{id}/posts/{post}", &["id", "post"]);
        assert_eq!(ep.resolve_path(&["3".into()]), "/users/3/posts/");
        assert_eq!(ep.resolve_path(&[]), "/users//posts/");
    }

    #[test]
    fn resolve_leaves_undeclared_placeholders_alone() {
        let ep = descriptor("/users/{id}/{ghost}", &["id"]);
        assert_eq!(ep.resolve_path(&["1".into()]), "/users/1/{ghost}");
    }

    #[test]
    fn method_upper_normalizes_document_case() {
        let ep = descriptor("/users", &[]);
        assert_eq!(ep.method_upper(), "GET");
    }
}

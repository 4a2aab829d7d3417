//! OpenAPI document parsing - flattens `paths` into endpoint descriptors

use serde_json::Value;

use crate::models::EndpointDescriptor;

/// Flatten an OpenAPI/Swagger document into one descriptor per
/// (path, method) pair, in document order.
///
/// A document without a `paths` object (or with an empty one) produces an
/// empty list rather than an error. The document is trusted: parameter
/// names are taken as-is, duplicates included, and nothing is checked
/// against the placeholders actually present in the path template.
pub fn parse_endpoints(doc: &Value) -> Vec<EndpointDescriptor> {
    let mut endpoints = Vec::new();

    if let Some(paths) = doc.get("paths").and_then(|p| p.as_object()) {
        for (path, methods) in paths {
            if let Some(methods_obj) = methods.as_object() {
                for (method, operation) in methods_obj {
                    // Skip non-HTTP method keys like a path-level "parameters"
                    if !is_http_method(method) {
                        continue;
                    }

                    let mut endpoint = EndpointDescriptor::new(method, path);
                    endpoint.description = operation_description(operation);
                    endpoint.param_names = path_param_names(operation);
                    endpoints.push(endpoint);
                }
            }
        }
    }

    endpoints
}

fn is_http_method(s: &str) -> bool {
    matches!(
        s.to_lowercase().as_str(),
        "get" | "post" | "put" | "patch" | "delete" | "head" | "options"
    )
}

/// Summary when non-empty, else description, else empty string
fn operation_description(operation: &Value) -> String {
    let summary = operation.get("summary").and_then(|v| v.as_str());
    if let Some(summary) = summary.filter(|s| !s.is_empty()) {
        return summary.to_string();
    }

    operation
        .get("description")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

/// Names of the operation's parameters whose location is "path",
/// in document order
fn path_param_names(operation: &Value) -> Vec<String> {
    operation
        .get("parameters")
        .and_then(|p| p.as_array())
        .map(|params| {
            params
                .iter()
                .filter(|p| p.get("in").and_then(|v| v.as_str()) == Some("path"))
                .filter_map(|p| p.get("name").and_then(|v| v.as_str()))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_every_path_method_pair() {
        let doc = json!({
            "paths": {
                "/users": {
                    "get": { "summary": "List users" },
                    "post": { "summary": "Create user" }
                },
                "/users/{id}": {
                    "delete": { "summary": "Delete user" }
                }
            }
        });

        let endpoints = parse_endpoints(&doc);
        assert_eq!(endpoints.len(), 3);
    }

    #[test]
    fn parses_the_reference_document() {
        let doc = json!({
            "paths": {
                "/users/{id}": {
                    "get": {
                        "summary": "Get user",
                        "parameters": [{ "name": "id", "in": "path" }]
                    }
                }
            }
        });

        let endpoints = parse_endpoints(&doc);
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].method, "get");
        assert_eq!(endpoints[0].path, "/users/{id}");
        assert_eq!(endpoints[0].description, "Get user");
        assert_eq!(endpoints[0].param_names, vec!["id"]);
    }

    #[test]
    fn missing_or_empty_paths_yields_empty_list() {
        assert!(parse_endpoints(&json!({})).is_empty());
        assert!(parse_endpoints(&json!({ "paths": {} })).is_empty());
        assert!(parse_endpoints(&json!({ "openapi": "3.0.0" })).is_empty());
    }

    #[test]
    fn description_falls_back_from_summary_to_description_to_empty() {
        let doc = json!({
            "paths": {
                "/a": { "get": { "summary": "Summary wins", "description": "ignored" } },
                "/b": { "get": { "summary": "", "description": "Description used" } },
                "/c": { "get": { "description": "Description used" } },
                "/d": { "get": {} }
            }
        });

        let endpoints = parse_endpoints(&doc);
        let by_path = |p: &str| {
            endpoints
                .iter()
                .find(|e| e.path == p)
                .unwrap()
                .description
                .clone()
        };

        assert_eq!(by_path("/a"), "Summary wins");
        assert_eq!(by_path("/b"), "Description used");
        assert_eq!(by_path("/c"), "Description used");
        assert_eq!(by_path("/d"), "");
    }

    #[test]
    fn only_path_parameters_are_kept_in_document_order() {
        let doc = json!({
            "paths": {
                "/orgs/{org}/repos/{repo}": {
                    "get": {
                        "parameters": [
                            { "name": "org", "in": "path" },
                            { "name": "page", "in": "query" },
                            { "name": "repo", "in": "path" },
                            { "name": "X-Trace", "in": "header" }
                        ]
                    }
                }
            }
        });

        let endpoints = parse_endpoints(&doc);
        assert_eq!(endpoints[0].param_names, vec!["org", "repo"]);
    }

    #[test]
    fn duplicate_parameter_names_pass_through() {
        let doc = json!({
            "paths": {
                "/x/{id}": {
                    "get": {
                        "parameters": [
                            { "name": "id", "in": "path" },
                            { "name": "id", "in": "path" }
                        ]
                    }
                }
            }
        });

        let endpoints = parse_endpoints(&doc);
        assert_eq!(endpoints[0].param_names, vec!["id", "id"]);
    }

    #[test]
    fn path_level_parameters_key_is_not_an_operation() {
        let doc = json!({
            "paths": {
                "/users/{id}": {
                    "parameters": [{ "name": "id", "in": "path" }],
                    "get": { "summary": "Get user" }
                }
            }
        });

        let endpoints = parse_endpoints(&doc);
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].method, "get");
    }

    #[test]
    fn method_case_is_preserved_from_the_document() {
        let doc = json!({
            "paths": {
                "/users": { "GET": { "summary": "upper-cased key" } }
            }
        });

        let endpoints = parse_endpoints(&doc);
        assert_eq!(endpoints[0].method, "GET");
        assert_eq!(endpoints[0].method_upper(), "GET");
    }
}

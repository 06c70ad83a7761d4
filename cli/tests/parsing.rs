use labelroute::{GraphDocument, parse_graph_document, parse_graph_str};
use labelroute_core::{RouteError, ValidationError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_parse_graph_str() {
    let document = parse_graph_str(
        r#"{"labels": ["a", "b"], "adjacency_matrix": [[0, 1.5], [1.5, 0]]}"#,
    )
    .unwrap();

    assert_eq!(
        document,
        GraphDocument {
            labels: vec!["a".to_string(), "b".to_string()],
            adjacency_matrix: vec![vec![0.0, 1.5], vec![1.5, 0.0]],
        }
    );

    let graph = document.into_graph().unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_parse_missing_field() {
    let result = parse_graph_str(r#"{"labels": ["a"]}"#);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("adjacency_matrix"));
}

#[test]
fn test_document_validation_errors_surface() {
    let document = parse_graph_str(
        r#"{"labels": ["a", "b"], "adjacency_matrix": [[0, 1], [1]]}"#,
    )
    .unwrap();

    assert!(matches!(
        document.into_graph(),
        Err(RouteError::Validation(ValidationError::NotSquare { row: 1, .. }))
    ));
}

#[test]
fn test_parse_graph_document_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"labels": ["x", "y", "z"], "adjacency_matrix": [[0, 2, 0], [0, 0, 3], [0, 0, 0]]}"#)
        .unwrap();
    file.flush().unwrap();

    let graph = parse_graph_document(file.path()).unwrap().into_graph().unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_weight(&"y".to_string(), &"z".to_string()), Some(3.0));
    assert_eq!(graph.edge_weight(&"z".to_string(), &"y".to_string()), None);
}

#[test]
fn test_parse_graph_document_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();
    file.flush().unwrap();

    let error = parse_graph_document(file.path()).unwrap_err();
    assert!(error.to_string().starts_with("Could not parse graph file"));
}

#[test]
fn test_parse_graph_document_missing_file() {
    let error = parse_graph_document(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(error.to_string().starts_with("Could not read graph file"));
}

#[test]
fn test_bundled_reference_graph_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/reference_graph.json");
    let graph = parse_graph_document(&path).unwrap().into_graph().unwrap();
    let reference = labelroute_core::reference_graph().unwrap();

    assert_eq!(graph.labels(), reference.labels());
    for node in reference.labels() {
        assert_eq!(graph.neighbors(node), reference.neighbors(node));
    }
}

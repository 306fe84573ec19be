//! Unit tests for small shared types.
use journey_prefill::error::{BlueprintError, CatalogueError, GraphConversionError};
use journey_prefill::prelude::*;

#[test]
fn test_source_type_wire_names() {
    assert_eq!(
        serde_json::to_string(&PrefillSourceType::DirectDependency).unwrap(),
        "\"direct_dependency\""
    );
    assert_eq!(
        serde_json::from_str::<PrefillSourceType>("\"transitive_dependency\"").unwrap(),
        PrefillSourceType::TransitiveDependency
    );
    assert_eq!(format!("{}", PrefillSourceType::Global), "global");
    assert_eq!(PrefillSourceType::Global.heading(), "Global Data");
}

#[test]
fn test_source_type_from_name() {
    for source_type in PrefillSourceType::ALL {
        assert_eq!(
            PrefillSourceType::from_name(source_type.as_str()),
            Some(source_type)
        );
    }
    assert_eq!(PrefillSourceType::from_name("form-a"), None);
    assert_eq!(PrefillSourceType::from_name("Global"), None);
}

#[test]
fn test_prefill_source_json_shape() {
    let source = PrefillSource {
        source_type: PrefillSourceType::Global,
        id: "organization".to_string(),
        name: "Organization Properties".to_string(),
        fields: vec![SourceField::new("org_id", "Organization ID")],
    };

    assert_eq!(
        serde_json::to_value(&source).unwrap(),
        serde_json::json!({
            "type": "global",
            "id": "organization",
            "name": "Organization Properties",
            "fields": [{"id": "org_id", "name": "Organization ID"}]
        })
    );
}

#[test]
fn test_prefill_config_accepts_snake_case() {
    let config: PrefillConfig = serde_json::from_str(
        r#"{"source_type": "global", "source_id": "global_user", "field_id": "user_id"}"#,
    )
    .unwrap();
    assert_eq!(
        config,
        PrefillConfig::new(PrefillSourceType::Global, "global_user", "user_id")
    );
}

#[test]
fn test_error_display() {
    let err = BlueprintError::Io {
        path: "graph.json".to_string(),
        message: "No such file".to_string(),
    };
    assert!(err.to_string().contains("graph.json"));
    assert!(err.to_string().contains("No such file"));

    let server = BlueprintError::ServerError("boom".to_string());
    assert!(server.to_string().contains("boom"));

    let conversion = GraphConversionError::ValidationError("missing id".to_string());
    assert!(conversion.to_string().contains("missing id"));

    let catalogue = CatalogueError::JsonParseError("eof".to_string());
    assert!(catalogue.to_string().contains("catalogue"));
}

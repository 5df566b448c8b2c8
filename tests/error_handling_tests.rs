//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Failed operations return the right error variant and code
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows callers to handle specific cases

use travel_admin::prelude::*;

fn store() -> ResourceStore {
    ResourceStore::seeded(&StoreConfig::seeded(5))
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_unknown_resource_code() {
        let err = AdminError::Resource(ResourceError::UnknownResource {
            resource: "castles".to_string(),
        });
        assert_eq!(err.error_code(), "UNKNOWN_RESOURCE");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_record_not_found_code() {
        let err = AdminError::Resource(ResourceError::RecordNotFound {
            resource: "hotels".to_string(),
            id: 9999,
        });
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_record_code() {
        let err = AdminError::Resource(ResourceError::InvalidRecord {
            resource: "tours".to_string(),
            message: "invalid type".to_string(),
        });
        assert_eq!(err.error_code(), "INVALID_RECORD");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_and_config_codes() {
        let err = AdminError::Validation(ValidationError::FieldError {
            field: "email".to_string(),
            message: "invalid format".to_string(),
        });
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err = AdminError::Config(ConfigError::FileNotFound {
            path: "missing.yaml".to_string(),
        });
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        let err = AdminError::Internal("boom".to_string());
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_not_found_response_details() {
        let err = store()
            .get_one("hotels", GetOneParams { id: 9999 })
            .unwrap_err();
        let response = err.to_response();

        assert_eq!(response.code, "RECORD_NOT_FOUND");
        assert!(response.message.contains("9999"));
        assert_eq!(
            response.details,
            Some(json!({ "resource": "hotels", "id": 9999 }))
        );
    }

    #[test]
    fn test_field_errors_response() {
        let err: AdminError = Hotel::default().validate().unwrap_err().into();
        let response = err.to_response();

        assert_eq!(response.code, "VALIDATION_ERROR");
        let details = response.details.unwrap();
        let fields = &details["fields"];
        assert_eq!(fields.as_array().unwrap().len(), 3);
        assert_eq!(fields[0]["field"], json!("name"));
    }

    #[test]
    fn test_response_serialization_skips_empty_details() {
        let response = AdminError::Internal("boom".to_string()).to_response();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["code"], json!("INTERNAL_ERROR"));
        assert!(value.get("details").is_none());
    }
}

// =============================================================================
// Error Message Tests
// =============================================================================

mod message_tests {
    use super::*;

    #[test]
    fn test_record_not_found_message() {
        let err = ResourceError::RecordNotFound {
            resource: "yachts".to_string(),
            id: 12,
        };
        assert_eq!(err.to_string(), "yachts record with id '12' not found");
    }

    #[test]
    fn test_field_errors_message() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError::new("name", "is required"),
            FieldValidationError::new("rating", "must be between 1 and 5 (value: 0)"),
        ]);
        let message = err.to_string();
        assert!(message.contains("name: is required"));
        assert!(message.contains("rating: must be between 1 and 5"));
    }
}

// =============================================================================
// Conversion Tests
// =============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<Value>("{ not json").unwrap_err();
        let err: AdminError = json_err.into();
        assert!(matches!(
            err,
            AdminError::Validation(ValidationError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<StoreConfig>("counts: [").unwrap_err();
        let err: AdminError = yaml_err.into();
        assert!(matches!(err, AdminError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn lookup(store: &ResourceStore) -> AdminResult<Value> {
            let result = store.get_one("faqs", GetOneParams { id: 404 })?;
            Ok(result.data)
        }

        let err = lookup(&store()).unwrap_err();
        assert!(matches!(
            err,
            AdminError::Resource(ResourceError::RecordNotFound { id: 404, .. })
        ));
    }
}

// =============================================================================
// Operation Failure Tests
// =============================================================================

mod operation_failure_tests {
    use super::*;

    #[test]
    fn test_every_operation_rejects_unknown_resource() {
        let mut store = store();

        let failures = [
            store.get_list("castles", &GetListParams::new()).map(|_| ()),
            store.get_one("castles", GetOneParams { id: 1 }).map(|_| ()),
            store.get_many("castles", &GetManyParams { ids: vec![1] }).map(|_| ()),
            store
                .get_many_reference("castles", GetManyReferenceParams::new("ownerId", 1))
                .map(|_| ()),
        ];
        for result in failures {
            assert!(matches!(
                result,
                Err(AdminError::Resource(ResourceError::UnknownResource { .. }))
            ));
        }

        assert!(store.create("castles", CreateParams::new(json!({}))).is_err());
        assert!(store
            .update("castles", UpdateParams::new(1, json!({})))
            .is_err());
        assert!(store.delete("castles", DeleteParams::new(1)).is_err());
        assert!(store
            .delete_many("castles", &DeleteManyParams { ids: vec![1] })
            .is_err());
    }

    #[test]
    fn test_wrong_field_type_is_invalid_record() {
        let mut store = store();

        let err = store
            .create("yachts", CreateParams::new(json!({ "capacity": "twelve" })))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RECORD");

        let err = store
            .update("reviews", UpdateParams::new(1, json!({ "rating": -2 })))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RECORD");

        let unchanged = store.get_one("reviews", GetOneParams { id: 1 }).unwrap();
        assert!(unchanged.data["rating"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn test_non_object_data_is_invalid_record() {
        let mut store = store();
        let err = store
            .create("faqs", CreateParams::new(json!("just a string")))
            .unwrap_err();
        match err {
            AdminError::Resource(ResourceError::InvalidRecord { resource, .. }) => {
                assert_eq!(resource, "faqs")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_handle_specific_errors() {
        let mut store = store();

        let outcome = match store.update("hotels", UpdateParams::new(9999, json!({}))) {
            Ok(_) => "updated",
            Err(err) if err.is_not_found() => "missing",
            Err(_) => "failed",
        };
        assert_eq!(outcome, "missing");
    }
}

use data_loader::core::models::{CustomResourceRequest, RequestType, ResponseStatus};
use data_loader::errors::LoaderError;
use data_loader::response::{failure_response, success_response};
use serde_json::json;

/// Tests for the completion response document.
/// These verify the JSON shape CloudFormation expects on the `ResponseURL`.

fn create_request(physical_resource_id: Option<&str>) -> CustomResourceRequest {
    let mut event = json!({
        "RequestType": "Create",
        "ResponseURL": "https://cloudformation-custom-resource-response.s3.amazonaws.com/signed",
        "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/seed/guid",
        "RequestId": "unique-request-id",
        "ResourceType": "Custom::DataLoader",
        "LogicalResourceId": "LoadUserAccounts",
        "ResourceProperties": {
            "ServiceToken": "arn:aws:lambda:us-east-1:123456789012:function:data-loader"
        }
    });
    if let Some(id) = physical_resource_id {
        event["PhysicalResourceId"] = json!(id);
    }
    serde_json::from_value(event).unwrap()
}

#[test]
fn test_request_deserializes_cloudformation_event() {
    let request = create_request(None);
    assert_eq!(request.request_type, RequestType::Create);
    assert_eq!(
        request.response_url,
        "https://cloudformation-custom-resource-response.s3.amazonaws.com/signed"
    );
    assert_eq!(request.logical_resource_id, "LoadUserAccounts");
    assert!(request.physical_resource_id.is_none());
    assert!(request.resource_properties.contains_key("ServiceToken"));
    assert!(request.old_resource_properties.is_none());
}

#[test]
fn test_request_rejects_unknown_request_type() {
    let event = json!({
        "RequestType": "Rename",
        "ResponseURL": "https://example.com",
        "StackId": "stack",
        "RequestId": "req",
        "LogicalResourceId": "Res"
    });
    assert!(serde_json::from_value::<CustomResourceRequest>(event).is_err());
}

#[test]
fn test_success_response_payload() {
    let request = create_request(None);
    let response = success_response(&request, "2024/01/01/[$LATEST]abcdef");

    let payload = serde_json::to_value(&response).unwrap();
    assert_eq!(payload["Status"], "SUCCESS");
    assert_eq!(payload["PhysicalResourceId"], "2024/01/01/[$LATEST]abcdef");
    assert_eq!(
        payload["Reason"],
        "See the details in CloudWatch Log Stream: 2024/01/01/[$LATEST]abcdef"
    );
    assert_eq!(
        payload["StackId"],
        "arn:aws:cloudformation:us-east-1:123456789012:stack/seed/guid"
    );
    assert_eq!(payload["RequestId"], "unique-request-id");
    assert_eq!(payload["LogicalResourceId"], "LoadUserAccounts");
    assert_eq!(payload["NoEcho"], false);
    assert_eq!(payload["Data"], json!({}));
}

#[test]
fn test_response_keeps_existing_physical_id() {
    let request = create_request(Some("seed-data-resource"));
    let response = success_response(&request, "log-stream");
    assert_eq!(response.physical_resource_id, "seed-data-resource");
}

#[test]
fn test_failure_response_carries_error() {
    let request = create_request(None);
    let error = LoaderError::AwsError("ValidationException: item too large".to_string());
    let response = failure_response(&request, "log-stream", &error);

    assert_eq!(response.status, ResponseStatus::Failed);
    let payload = serde_json::to_value(&response).unwrap();
    assert_eq!(payload["Status"], "FAILED");
    assert_eq!(
        payload["Reason"],
        "Failed to interact with AWS services: ValidationException: item too large"
    );
    assert_eq!(
        payload["Data"]["Error"],
        "Failed to interact with AWS services: ValidationException: item too large"
    );
}

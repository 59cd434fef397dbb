//! Seed data records and their DynamoDB item form.

use std::collections::HashMap;
use std::path::Path;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};

use crate::errors::LoaderError;

/// A single flat object from the data file. No schema is enforced.
pub type Record = Map<String, Value>;

pub type Item = HashMap<String, AttributeValue>;

/// # Errors
///
/// Returns an error if the text is not a JSON array of objects.
pub fn parse_records(json: &str) -> Result<Vec<Record>, LoaderError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads the whole data file and parses it, preserving record order.
///
/// # Errors
///
/// Returns [`LoaderError::ReadError`] if the file cannot be read and
/// [`LoaderError::ParseError`] if its contents are not an array of objects.
pub async fn load_records(path: &Path) -> Result<Vec<Record>, LoaderError> {
    let json = tokio::fs::read_to_string(path).await?;
    parse_records(&json)
}

/// Maps JSON values onto attribute types: string `S`, number `N`,
/// boolean `BOOL`, null `NULL`, array `L`, object `M`.
///
/// # Errors
///
/// Returns an error if the record cannot be represented as an item.
pub fn to_item(record: &Record) -> Result<Item, LoaderError> {
    Ok(serde_dynamo::to_item(record)?)
}

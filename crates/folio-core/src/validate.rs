// Rust guideline compliant 2026-10-18

//! Record validators.
//!
//! These are the only constructors for [`Profile`], [`Achievement`] and
//! [`ContentItem`]. Each takes the untyped JSON a host feeds in and either
//! returns a checked record or a [`ValidationError`] describing the first
//! problem found.

use crate::error::{RecordKind, ValidationError};
use crate::models::{coerce_millis, coerce_timestamp, Achievement, ContentItem, ContentType, Profile, ProfileImage};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Validates a profile record.
///
/// # Errors
///
/// Returns an error if:
/// - The value is not an object
/// - `name`, `bio`, `profileImage.src` or `profileImage.fallbackInitials` is missing or empty
/// - `linkedinUrl` is missing or not an absolute http(s) URL
pub fn validate_profile(value: &Value) -> Result<Profile, ValidationError> {
    let kind = RecordKind::Profile;
    let obj = as_object(value, kind)?;

    let image = match obj.get("profileImage") {
        Some(Value::Object(image)) => image,
        _ => return Err(ValidationError::new(kind, "profileImage is required")),
    };

    let profile_image = ProfileImage {
        src: required_str(image, "src", kind)
            .map_err(|_| ValidationError::new(kind, "profileImage.src is required"))?,
        alt: optional_str(image, "alt", kind)?.unwrap_or_default(),
        fallback_initials: required_str(image, "fallbackInitials", kind)
            .map_err(|_| ValidationError::new(kind, "profileImage.fallbackInitials is required"))?,
    };

    Ok(Profile {
        name: required_str(obj, "name", kind)?,
        bio: required_str(obj, "bio", kind)?,
        profile_image,
        linkedin_url: required_url(obj, "linkedinUrl", kind)?,
    })
}

/// Validates a single achievement record.
///
/// # Errors
///
/// Returns an error if `id`, `title` or `description` is missing or empty,
/// or if `order` is present but not an integer.
pub fn validate_achievement(value: &Value) -> Result<Achievement, ValidationError> {
    let kind = RecordKind::Achievement;
    let obj = as_object(value, kind)?;

    let order = match obj.get("order") {
        None | Some(Value::Null) => 0,
        Some(order) => order
            .as_i64()
            .ok_or_else(|| ValidationError::new(kind, "order must be an integer"))?,
    };

    Ok(Achievement {
        id: required_str(obj, "id", kind)?,
        title: required_str(obj, "title", kind)?,
        description: required_str(obj, "description", kind)?,
        order,
    })
}

/// Validates a single content item record.
///
/// A missing or unparseable `publicationDate` is not an error; it is
/// coerced to epoch `0` for sorting.
///
/// # Errors
///
/// Returns an error if:
/// - `id`, `title` or `description` is missing or empty
/// - `type` is not one of `talk`, `blog`, `whitepaper`, `article`
/// - `externalLink` is present, non-null and not an absolute http(s) URL
/// - `featured` is present, non-null and not a boolean
pub fn validate_content_item(value: &Value) -> Result<ContentItem, ValidationError> {
    let kind = RecordKind::ContentItem;
    let obj = as_object(value, kind)?;

    let content_type = match obj.get("type") {
        Some(Value::String(raw)) => ContentType::parse(raw.trim()).ok_or_else(|| {
            ValidationError::new(kind, format!("type must be talk, blog, whitepaper or article, got '{raw}'"))
        })?,
        _ => return Err(ValidationError::new(kind, "type is required")),
    };

    let (publication_date, published_at) = match obj.get("publicationDate") {
        Some(Value::String(raw)) => (Some(raw.clone()), coerce_timestamp(raw)),
        Some(Value::Number(raw)) => (Some(raw.to_string()), coerce_millis(raw)),
        _ => (None, 0),
    };

    let external_link = match obj.get("externalLink") {
        None | Some(Value::Null) => None,
        Some(_) => Some(required_url(obj, "externalLink", kind)?),
    };

    let featured = match obj.get("featured") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(ValidationError::new(kind, "featured must be a boolean")),
    };

    Ok(ContentItem {
        id: required_str(obj, "id", kind)?,
        title: required_str(obj, "title", kind)?,
        content_type,
        publication_date,
        published_at,
        description: required_str(obj, "description", kind)?,
        external_link,
        featured,
    })
}

/// Validates a list of achievements, rejecting the whole list on the first
/// bad element or duplicate `id`.
///
/// # Errors
///
/// Returns the first element's validation error, tagged with its index.
pub fn validate_achievements(values: &[Value]) -> Result<Vec<Achievement>, ValidationError> {
    validate_list(values, RecordKind::Achievement, validate_achievement, |a| a.id.as_str())
}

/// Validates a list of content items, rejecting the whole list on the first
/// bad element or duplicate `id`.
///
/// # Errors
///
/// Returns the first element's validation error, tagged with its index.
pub fn validate_content(values: &[Value]) -> Result<Vec<ContentItem>, ValidationError> {
    validate_list(values, RecordKind::ContentItem, validate_content_item, |c| c.id.as_str())
}

fn validate_list<T>(
    values: &[Value],
    kind: RecordKind,
    validate: impl Fn(&Value) -> Result<T, ValidationError>,
    id_of: impl Fn(&T) -> &str,
) -> Result<Vec<T>, ValidationError> {
    let mut records = Vec::with_capacity(values.len());
    let mut seen = HashSet::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let record = validate(value).map_err(|err| err.at(index))?;
        if !seen.insert(id_of(&record).to_string()) {
            return Err(
                ValidationError::new(kind, format!("duplicate id '{}'", id_of(&record))).at(index),
            );
        }
        records.push(record);
    }

    Ok(records)
}

fn as_object(value: &Value, kind: RecordKind) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(kind, "expected an object"))
}

fn required_str(
    obj: &Map<String, Value>,
    field: &str,
    kind: RecordKind,
) -> Result<String, ValidationError> {
    match optional_str(obj, field, kind)? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::new(kind, format!("{field} is required"))),
    }
}

fn optional_str(
    obj: &Map<String, Value>,
    field: &str,
    kind: RecordKind,
) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.trim().to_string())),
        Some(_) => Err(ValidationError::new(kind, format!("{field} must be a string"))),
    }
}

fn required_url(
    obj: &Map<String, Value>,
    field: &str,
    kind: RecordKind,
) -> Result<String, ValidationError> {
    let raw = required_str(obj, field, kind)?;
    match url::Url::parse(&raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(raw),
        _ => Err(ValidationError::new(
            kind,
            format!("{field} must be an absolute http(s) URL"),
        )),
    }
}

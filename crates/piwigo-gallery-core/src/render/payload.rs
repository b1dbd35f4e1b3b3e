//! Lenient decoding of the `pwg.categories.getList` response.
//!
//! Expected shape: `{ "result": { "categories": [ { name, comment, tn_url, url, .. } ] } }`.
//! The strict decoder reports what is wrong; callers that must not fail use
//! [`CategoryListResponse::decode_lenient`], which degrades to no albums.

use serde_json::Value;

use crate::error::PayloadError;

/// One album card's source fields. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Album {
    pub name: String,
    pub comment: String,
    pub thumbnail_url: String,
    pub url: String,
}

impl Album {
    /// Extracts the four fields from one category entry.
    ///
    /// Strings are taken as-is, numbers are stringified, anything else
    /// (null, bool, arrays, objects, a missing key, a non-object entry) is empty.
    pub fn from_value(entry: &Value) -> Self {
        Self {
            name: field_text(entry, "name"),
            comment: field_text(entry, "comment"),
            thumbnail_url: field_text(entry, "tn_url"),
            url: field_text(entry, "url"),
        }
    }
}

fn field_text(entry: &Value, key: &str) -> String {
    match entry.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Decoded category list, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListResponse {
    pub categories: Vec<Album>,
}

impl CategoryListResponse {
    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        let json: Value = serde_json::from_str(raw)?;
        let result = json
            .get("result")
            .filter(|r| r.is_object())
            .ok_or(PayloadError::MissingResult)?;
        let categories = result
            .get("categories")
            .ok_or(PayloadError::MissingCategories)?
            .as_array()
            .ok_or(PayloadError::CategoriesNotArray)?;

        Ok(Self {
            categories: categories.iter().map(Album::from_value).collect(),
        })
    }

    /// Like [`Self::decode`] but a malformed payload yields no albums.
    pub fn decode_lenient(raw: &str) -> Self {
        match Self::decode(raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("malformed category list payload, rendering empty gallery: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_categories_in_order() {
        let raw = r#"{"stat":"ok","result":{"categories":[
            {"id":1,"name":"Alps","comment":"Snow","tn_url":"https://e.x/a.jpg","url":"https://e.x/a"},
            {"id":2,"name":"Coast","comment":"","tn_url":"https://e.x/b.jpg","url":"https://e.x/b"}
        ]}}"#;
        let list = CategoryListResponse::decode(raw).unwrap();
        assert_eq!(list.categories.len(), 2);
        assert_eq!(list.categories[0].name, "Alps");
        assert_eq!(list.categories[0].thumbnail_url, "https://e.x/a.jpg");
        assert_eq!(list.categories[1].url, "https://e.x/b");
    }

    #[test]
    fn absent_and_odd_fields_become_text_or_empty() {
        let raw = r#"{"result":{"categories":[{"name":2023,"comment":null,"url":true}]}}"#;
        let album = &CategoryListResponse::decode(raw).unwrap().categories[0];
        assert_eq!(album.name, "2023");
        assert_eq!(album.comment, "");
        assert_eq!(album.thumbnail_url, "");
        assert_eq!(album.url, "");
    }

    #[test]
    fn non_object_entry_is_an_empty_album() {
        let raw = r#"{"result":{"categories":["oops"]}}"#;
        let list = CategoryListResponse::decode(raw).unwrap();
        assert_eq!(list.categories, vec![Album::default()]);
    }

    #[test]
    fn strict_decode_reports_shape_errors() {
        assert!(matches!(
            CategoryListResponse::decode("{"),
            Err(PayloadError::Json(_))
        ));
        assert!(matches!(
            CategoryListResponse::decode(r#"{"stat":"fail"}"#),
            Err(PayloadError::MissingResult)
        ));
        assert!(matches!(
            CategoryListResponse::decode(r#"{"result":{}}"#),
            Err(PayloadError::MissingCategories)
        ));
        assert!(matches!(
            CategoryListResponse::decode(r#"{"result":{"categories":{"0":{}}}}"#),
            Err(PayloadError::CategoriesNotArray)
        ));
    }

    #[test]
    fn lenient_decode_degrades_to_empty() {
        for raw in ["", "null", "[]", r#"{"result":"x"}"#, r#"{"result":{"categories":7}}"#] {
            assert!(CategoryListResponse::decode_lenient(raw).categories.is_empty(), "{raw}");
        }
    }
}

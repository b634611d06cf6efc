//! The structured-output contract the model must answer with.

use serde::{Deserialize, Serialize};

/// Primitive type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// JSON boolean
    Boolean,
    /// JSON string
    String,
}

/// One required property of the response object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SchemaField {
    /// Property name as it appears in the JSON object
    pub name: &'static str,
    /// Property type
    pub kind: FieldKind,
    /// Description shown to the model
    pub description: &'static str,
}

const fn string_field(name: &'static str, description: &'static str) -> SchemaField {
    SchemaField {
        name,
        kind: FieldKind::String,
        description,
    }
}

const FIELDS: [SchemaField; 12] = [
    SchemaField {
        name: "is_bad_word",
        kind: FieldKind::Boolean,
        description: "ユーザープロンプトに悪意のある単語が含まれているか",
    },
    string_field("bad_reason", "is_bad_wordをtrueにした理由"),
    string_field("line0", "短歌の1句目, 日本語で5音節程度"),
    string_field("line1", "短歌の2句目, 日本語で7音節程度"),
    string_field("line2", "短歌の3句目, 日本語で5音節程度"),
    string_field("line3", "短歌の4句目, 日本語で7音節程度"),
    string_field("line4", "短歌の5句目, 日本語で7音節程度"),
    string_field("yomi0", "短歌の1句目のふりがな"),
    string_field("yomi1", "短歌の2句目のふりがな"),
    string_field("yomi2", "短歌の3句目のふりがな"),
    string_field("yomi3", "短歌の4句目のふりがな"),
    string_field("yomi4", "短歌の5句目のふりがな"),
];

/// Fixed response schema: twelve mandatory, non-nullable fields.
///
/// Backends translate this into their own schema dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseSchema;

impl ResponseSchema {
    /// Description of the response object as a whole.
    pub const DESCRIPTION: &'static str = "生成される短歌のオブジェクト";

    /// All fields, in declaration order.
    pub fn fields(&self) -> &'static [SchemaField] {
        &FIELDS
    }

    /// Names of the required fields.
    pub fn required(&self) -> impl Iterator<Item = &'static str> {
        FIELDS.iter().map(|f| f.name)
    }
}

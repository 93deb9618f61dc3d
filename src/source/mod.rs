//! Typed, path-tracking access to raw source documents
//!
//! Source documents arrive as already-decoded `serde_json::Value` trees.
//! Every accessor here remembers where it is in the tree so that a failure
//! can name the exact field (`effects[2].type.name`) that was wrong.

use crate::error::{CatalogError, Result};
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt;

/// One step of a field path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

/// Location of a value inside a source record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: SmallVec<[Segment; 8]>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, name: &'static str) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Key(name));
        next
    }

    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Index(index));
        next
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Key(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Short name of a JSON value's kind, for error messages
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A borrowed source value together with its path
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: FieldPath,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: FieldPath::root(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Build a `MalformedRecord` error located at this node
    pub fn malformed(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::malformed(self.path.to_string(), reason)
    }

    fn expected(&self, what: &str) -> CatalogError {
        self.malformed(format!("expected {}, found {}", what, kind_of(self.value)))
    }

    /// Get an optional field; missing and `null` both read as `None`
    pub fn field_opt(&self, name: &'static str) -> Result<Option<Node<'a>>> {
        let object = self.value.as_object().ok_or_else(|| self.expected("object"))?;
        Ok(object
            .get(name)
            .filter(|value| !value.is_null())
            .map(|value| Node {
                value,
                path: self.path.key(name),
            }))
    }

    /// Get a required field
    pub fn field(&self, name: &'static str) -> Result<Node<'a>> {
        self.field_opt(name)?.ok_or_else(|| {
            CatalogError::malformed(self.path.key(name).to_string(), "missing required field")
        })
    }

    pub fn as_i32(&self) -> Result<i32> {
        let raw = self
            .value
            .as_i64()
            .ok_or_else(|| self.expected("integer"))?;
        i32::try_from(raw).map_err(|_| self.malformed(format!("integer {} out of range", raw)))
    }

    pub fn as_u32(&self) -> Result<u32> {
        let raw = self
            .value
            .as_u64()
            .ok_or_else(|| self.expected("non-negative integer"))?;
        u32::try_from(raw).map_err(|_| self.malformed(format!("integer {} out of range", raw)))
    }

    pub fn as_str(&self) -> Result<&'a str> {
        self.value.as_str().ok_or_else(|| self.expected("string"))
    }

    pub fn as_bool(&self) -> Result<bool> {
        self.value.as_bool().ok_or_else(|| self.expected("boolean"))
    }

    /// Elements of an array, each carrying its indexed path
    pub fn elements(&self) -> Result<Vec<Node<'a>>> {
        let array = self.value.as_array().ok_or_else(|| self.expected("array"))?;
        Ok(array
            .iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                path: self.path.index(i),
            })
            .collect())
    }

    pub fn i32_field(&self, name: &'static str) -> Result<i32> {
        self.field(name)?.as_i32()
    }

    pub fn i32_field_opt(&self, name: &'static str) -> Result<Option<i32>> {
        self.field_opt(name)?.map(|node| node.as_i32()).transpose()
    }

    pub fn u32_field_opt(&self, name: &'static str) -> Result<Option<u32>> {
        self.field_opt(name)?.map(|node| node.as_u32()).transpose()
    }

    pub fn str_field(&self, name: &'static str) -> Result<&'a str> {
        self.field(name)?.as_str()
    }

    pub fn bool_field(&self, name: &'static str) -> Result<bool> {
        self.field(name)?.as_bool()
    }

    /// Optional boolean flag, `default` when missing or `null`
    pub fn bool_field_or(&self, name: &'static str, default: bool) -> Result<bool> {
        Ok(self
            .field_opt(name)?
            .map(|node| node.as_bool())
            .transpose()?
            .unwrap_or(default))
    }
}

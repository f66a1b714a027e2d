//! Vertex-type argument resolution for bipartite routines.
//!
//! The graph itself lives elsewhere; this module only needs to ask whether a
//! vertex attribute exists and to fetch its values, which is all
//! `VertexAttributes` exposes.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Attribute consulted when no explicit type vector is given.
pub const TYPE_ATTR: &str = "type";

/// A boolean-coercible vertex type value.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeValue {
    /// `None` is a missing value.
    Logical(Option<bool>),
    Numeric(f64),
    Text(String),
}

impl TypeValue {
    /// Logical coercion; `None` when the value has no boolean reading.
    pub fn to_logical(&self) -> Option<bool> {
        match self {
            TypeValue::Logical(b) => *b,
            TypeValue::Numeric(x) if x.is_nan() => None,
            TypeValue::Numeric(x) => Some(*x != 0.0),
            TypeValue::Text(s) => match s.as_str() {
                "TRUE" | "true" | "True" | "T" => Some(true),
                "FALSE" | "false" | "False" | "F" => Some(false),
                _ => None,
            },
        }
    }

    fn is_logical(&self) -> bool {
        matches!(self, TypeValue::Logical(_))
    }
}

impl From<bool> for TypeValue {
    fn from(b: bool) -> Self {
        TypeValue::Logical(Some(b))
    }
}

impl From<f64> for TypeValue {
    fn from(x: f64) -> Self {
        TypeValue::Numeric(x)
    }
}

impl From<&str> for TypeValue {
    fn from(s: &str) -> Self {
        TypeValue::Text(s.to_owned())
    }
}

/// Read access to per-vertex attributes of a graph.
pub trait VertexAttributes {
    fn has_vertex_attr(&self, name: &str) -> bool;
    fn vertex_attr(&self, name: &str) -> Option<Vec<TypeValue>>;
}

/// In-memory attribute table keyed by attribute name.
#[derive(Clone, Debug, Default)]
pub struct VertexTypeTable {
    attrs: BTreeMap<String, Vec<TypeValue>>,
}

impl VertexTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, name: impl Into<String>, values: Vec<TypeValue>) -> Self {
        self.attrs.insert(name.into(), values);
        self
    }
}

impl VertexAttributes for VertexTypeTable {
    fn has_vertex_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    fn vertex_attr(&self, name: &str) -> Option<Vec<TypeValue>> {
        self.attrs.get(name).cloned()
    }
}

/// Resolve vertex types to a boolean vector.
///
/// Explicit `types` win; otherwise the graph's `"type"` attribute is used.
/// Non-logical values are coerced (with a warning) and any value without a
/// boolean reading is `InvalidInput`. With nothing to resolve, `required`
/// selects between `MissingVertexTypes` and `Ok(None)`.
pub fn resolve_vertex_types<G: VertexAttributes + ?Sized>(
    types: Option<&[TypeValue]>,
    graph: &G,
    required: bool,
) -> Result<Option<Vec<bool>>> {
    let from_graph;
    let values = match types {
        Some(t) => Some(t),
        None if graph.has_vertex_attr(TYPE_ATTR) => {
            from_graph = graph.vertex_attr(TYPE_ATTR);
            from_graph.as_deref()
        }
        None => None,
    };

    let Some(values) = values else {
        if required {
            return Err(Error::MissingVertexTypes);
        }
        return Ok(None);
    };

    if !values.iter().all(TypeValue::is_logical) {
        tracing::warn!(len = values.len(), "vertex types converted to logical");
    }
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.to_logical().ok_or_else(|| {
                Error::invalid(format!("missing value is not allowed in vertex types (vertex {i})"))
            })
        })
        .collect::<Result<Vec<bool>>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bools(v: &[bool]) -> Vec<TypeValue> {
        v.iter().map(|&b| b.into()).collect()
    }

    #[test]
    fn explicit_vector_wins_over_attribute() {
        let g = VertexTypeTable::new().with_attr(TYPE_ATTR, bools(&[true, true]));
        let t = bools(&[false, true]);
        assert_eq!(
            resolve_vertex_types(Some(&t[..]), &g, true).unwrap(),
            Some(vec![false, true])
        );
    }

    #[test]
    fn falls_back_to_type_attribute() {
        let g = VertexTypeTable::new().with_attr(TYPE_ATTR, bools(&[true, false, true]));
        assert_eq!(
            resolve_vertex_types(None, &g, true).unwrap(),
            Some(vec![true, false, true])
        );
    }

    #[test]
    fn missing_types_depend_on_required() {
        let g = VertexTypeTable::new().with_attr("color", bools(&[true]));
        assert_eq!(
            resolve_vertex_types(None, &g, true),
            Err(Error::MissingVertexTypes)
        );
        assert_eq!(resolve_vertex_types(None, &g, false).unwrap(), None);
    }

    #[test]
    fn coerces_numbers_and_text() {
        let g = VertexTypeTable::new();
        let t = vec![
            TypeValue::from(0.0),
            TypeValue::from(2.5),
            TypeValue::from("TRUE"),
            TypeValue::from("F"),
        ];
        assert_eq!(
            resolve_vertex_types(Some(&t[..]), &g, true).unwrap(),
            Some(vec![false, true, true, false])
        );
    }

    #[test]
    fn missing_values_are_rejected() {
        let g = VertexTypeTable::new();
        for bad in [
            TypeValue::Logical(None),
            TypeValue::from(f64::NAN),
            TypeValue::from("maybe"),
        ] {
            let t = vec![TypeValue::from(true), bad];
            assert!(matches!(
                resolve_vertex_types(Some(&t[..]), &g, false),
                Err(Error::InvalidInput { .. })
            ));
        }
    }
}

//! idShort-path construction over submodel element trees.
//!
//! Paths follow the Part 2 idShortPath grammar: `submodel-elements/{idShort}`
//! below a Submodel, `.{idShort}` below a collection or entity, and an
//! encoded `[index]` (`%5B{index}%5D`) below a list.

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::referable;

/// Path a child would get when created under `parent`, or `None` when the
/// parent carries no usable `path`/`modelType` or the required `idShort`
/// is blank.
///
/// List children are addressed by index, so `id_short` is ignored for a
/// `SubmodelElementList` parent; the list's current length becomes the new
/// index.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::created_element_path;
/// use serde_json::json;
///
/// let submodel = json!({"modelType": "Submodel", "path": "https://s/sm"});
/// assert_eq!(
///     created_element_path(&submodel, Some("Temp")).as_deref(),
///     Some("https://s/sm/submodel-elements/Temp")
/// );
///
/// let list = json!({"modelType": "SubmodelElementList", "path": "p", "value": [{}, {}]});
/// assert_eq!(created_element_path(&list, None).as_deref(), Some("p%5B2%5D"));
/// ```
#[must_use]
pub fn created_element_path(parent: &Value, id_short: Option<&str>) -> Option<String> {
    let path = nonblank_str(parent.get("path"))?;
    let model_type = nonblank_str(parent.get("modelType"))?;

    match model_type {
        "Submodel" => {
            let id_short = nonblank(id_short)?;
            Some(format!("{path}/submodel-elements/{id_short}"))
        }
        "SubmodelElementList" => {
            let index = parent.get("value")?.as_array()?.len();
            Some(format!("{path}%5B{index}%5D"))
        }
        _ => {
            let id_short = nonblank(id_short)?;
            Some(format!("{path}.{id_short}"))
        }
    }
}

/// Walk a submodel (or element) tree, writing a `path` onto every element
/// and filling in a random id where one is missing.
///
/// This is the one place the resolver mutates its input: downstream
/// consumers address elements by `path` and `id`, so both must exist on
/// every node after a fetch. Children are recursed through
/// `submodelElements`, collection/list `value` arrays, and entity
/// `statements`.
pub fn annotate_element_paths(element: &mut Value, start_path: &str) {
    let Some(fields) = element.as_object_mut() else {
        return;
    };
    if fields.is_empty() {
        return;
    }

    fields.insert("path".to_string(), Value::String(start_path.to_string()));
    let needs_id = !matches!(fields.get("id"), Some(Value::String(id)) if !id.is_empty());
    if needs_id {
        let id = Uuid::new_v4().to_string();
        debug!(path = start_path, %id, "assigned generated element id");
        fields.insert("id".to_string(), Value::String(id));
    }

    let model_type = match fields.get("modelType") {
        Some(Value::String(model_type)) => model_type.clone(),
        _ => String::new(),
    };

    if let Some(Value::Array(children)) = fields.get_mut("submodelElements") {
        if !children.is_empty() {
            for child in children.iter_mut() {
                let id_short = referable::id_short_or_empty(child);
                let child_path = format!("{start_path}/submodel-elements/{id_short}");
                annotate_element_paths(child, &child_path);
            }
            return;
        }
    }

    if let Some(Value::Array(children)) = fields.get_mut("value") {
        if !children.is_empty() {
            match model_type.as_str() {
                "SubmodelElementCollection" => {
                    for child in children.iter_mut() {
                        let id_short = referable::id_short_or_empty(child);
                        let child_path = format!("{start_path}.{id_short}");
                        annotate_element_paths(child, &child_path);
                    }
                    return;
                }
                "SubmodelElementList" => {
                    for (index, child) in children.iter_mut().enumerate() {
                        let child_path = format!("{start_path}%5B{index}%5D");
                        annotate_element_paths(child, &child_path);
                    }
                    return;
                }
                _ => {}
            }
        }
    }

    if let Some(Value::Array(children)) = fields.get_mut("statements") {
        if !children.is_empty() && model_type == "Entity" {
            for child in children.iter_mut() {
                let id_short = referable::id_short_or_empty(child);
                let child_path = format!("{start_path}.{id_short}");
                annotate_element_paths(child, &child_path);
            }
        }
    }
}

fn nonblank_str(value: Option<&Value>) -> Option<&str> {
    nonblank(value?.as_str())
}

fn nonblank(value: Option<&str>) -> Option<&str> {
    let value = value?;
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

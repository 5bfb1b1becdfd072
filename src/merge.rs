//! Deep merge over JSON trees.
//!
//! The single piece of real logic in this crate: a recursive, patch-priority
//! merge used to enforce required settings in the host's `openclaw.json`.
//! Object keys merge recursively; every other type (scalars, null, arrays)
//! is replaced wholesale by the patch value.

use serde_json::Value;

/// Merge `patch` into `target`, returning a new value. Pure and total: any
/// pair of JSON values is accepted and a value is always produced.
///
/// Rules, in order:
/// 1. Arrays never merge element-wise; if either side is an array, the patch
///    value replaces the target outright.
/// 2. A non-object target is replaced by the patch.
/// 3. A non-object patch replaces the target. `null` counts as a scalar here,
///    not as absence, so a `null` patch yields `null`.
/// 4. Two objects merge key by key: existing keys recurse, new keys are
///    inserted as-is in patch iteration order.
///
/// Neither input is mutated. Key order of the target is preserved; patch-only
/// keys append in the patch's order.
pub fn deep_merge(target: &Value, patch: &Value) -> Value {
    if target.is_array() || patch.is_array() {
        return patch.clone();
    }
    let (Some(target_map), Some(patch_map)) = (target.as_object(), patch.as_object()) else {
        return patch.clone();
    };

    let mut out = target_map.clone();
    for (key, patch_value) in patch_map {
        let merged = match out.get(key) {
            Some(existing) => deep_merge(existing, patch_value),
            None => patch_value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    Value::Object(out)
}

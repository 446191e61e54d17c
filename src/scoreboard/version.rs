use crate::nbt::Value;

/// Schema version assumed when a file carries no DataVersion field
pub const DEFAULT_DATA_VERSION: i32 = 3120;

/// Resolve the save format's schema version. The field sits at the tree
/// root in some files and under the `data` compound in others; files
/// predating it get [`DEFAULT_DATA_VERSION`]. Never fails — strategy
/// selection has its own fallback.
pub fn data_version(root: &Value) -> i32 {
    root.get("DataVersion")
        .and_then(Value::as_int)
        .or_else(|| {
            root.get("data")
                .and_then(|data| data.get("DataVersion"))
                .and_then(Value::as_int)
        })
        .unwrap_or(DEFAULT_DATA_VERSION)
}

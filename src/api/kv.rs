use serde::{Deserialize, Serialize};

/// AlwaysOnSSL key-value storage entry.
///
/// Writing requires an AlwaysOnSSL KV-Storage authorization key, see
/// [`Client::with_kv_store_key`](crate::Client::with_kv_store_key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueStoreRequest {
    #[serde(rename = "filename", skip_serializing_if = "String::is_empty")]
    pub key: String,

    #[serde(rename = "hash")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValueStoreResult {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let req = KeyValueStoreRequest {
            key: ".well-known/pki-validation/fileauth.txt".to_owned(),
            value: "201801011200001a2b3c".to_owned(),
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "filename": ".well-known/pki-validation/fileauth.txt",
                "hash": "201801011200001a2b3c"
            })
        );
    }
}

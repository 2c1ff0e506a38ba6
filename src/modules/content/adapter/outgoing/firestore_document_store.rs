use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::content::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};

const FIRESTORE_HOST: &str = "https://firestore.googleapis.com/v1";

/// Natural keys double as document ids, so anything outside the unreserved
/// set has to be escaped into the request path ("Self Employed",
/// "Integers: Beyond the Decimal Point", ...).
fn percent_encode(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn map_transport_error(msg: String) -> DocumentStoreError {
    DocumentStoreError::Unavailable(msg)
}

// ============================================================================
// JSON <-> Firestore value mapping
// ============================================================================

fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if n.is_f64() {
                json!({ "doubleValue": n })
            } else {
                // Firestore carries 64-bit integers as strings.
                json!({ "integerValue": n.to_string() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_firestore_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(name, v)| (name.clone(), to_firestore_value(v)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

fn to_firestore_fields(document: &Value) -> Result<Value, DocumentStoreError> {
    let map = document.as_object().ok_or_else(|| {
        DocumentStoreError::Decode("document body must be a JSON object".to_string())
    })?;
    let fields: Map<String, Value> = map
        .iter()
        .map(|(name, v)| (name.clone(), to_firestore_value(v)))
        .collect();
    Ok(Value::Object(fields))
}

fn from_firestore_value(value: &Value) -> Result<Value, DocumentStoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| DocumentStoreError::Decode(format!("unexpected value shape: {value}")))?;

    if let Some(s) = obj.get("stringValue").and_then(Value::as_str) {
        return Ok(Value::String(s.to_string()));
    }
    if let Some(b) = obj.get("booleanValue").and_then(Value::as_bool) {
        return Ok(Value::Bool(b));
    }
    if let Some(raw) = obj.get("integerValue") {
        let parsed = match raw {
            Value::String(s) => s.parse::<i64>().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        };
        let n = parsed
            .ok_or_else(|| DocumentStoreError::Decode(format!("bad integerValue: {raw}")))?;
        return Ok(json!(n));
    }
    if let Some(d) = obj.get("doubleValue") {
        return Ok(d.clone());
    }
    if obj.contains_key("nullValue") {
        return Ok(Value::Null);
    }
    if let Some(array) = obj.get("arrayValue") {
        // An empty array comes back as {"arrayValue": {}} with no "values".
        let items = array
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(from_firestore_value).collect())
            .transpose()?
            .unwrap_or_default();
        return Ok(Value::Array(items));
    }
    if let Some(map) = obj.get("mapValue") {
        let fields = map.get("fields").cloned().unwrap_or_else(|| json!({}));
        return from_firestore_fields(&fields);
    }

    Err(DocumentStoreError::Decode(format!(
        "unsupported Firestore value: {value}"
    )))
}

fn from_firestore_fields(fields: &Value) -> Result<Value, DocumentStoreError> {
    let map = fields
        .as_object()
        .ok_or_else(|| DocumentStoreError::Decode("fields must be an object".to_string()))?;
    let mut out = Map::new();
    for (name, value) in map {
        out.insert(name.clone(), from_firestore_value(value)?);
    }
    Ok(Value::Object(out))
}

// ============================================================================
// Transport seam
// ============================================================================

/// Internal seam so the adapter is testable without real HTTP.
#[async_trait]
trait FirestoreHttp: Send + Sync {
    /// GET a resource. `None` means 404.
    async fn get(&self, url: &str) -> Result<Option<Value>, String>;

    async fn patch(&self, url: &str, body: Value) -> Result<(), String>;
}

struct ReqwestFirestoreHttp {
    client: reqwest::Client,
}

#[async_trait]
impl FirestoreHttp for ReqwestFirestoreHttp {
    async fn get(&self, url: &str) -> Result<Option<Value>, String> {
        let response = self.client.get(url).send().await.map_err(|e| e.to_string())?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("GET failed with {status}: {body}"));
        }
        let value = response.json::<Value>().await.map_err(|e| e.to_string())?;
        Ok(Some(value))
    }

    async fn patch(&self, url: &str, body: Value) -> Result<(), String> {
        let response = self
            .client
            .patch(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("PATCH failed with {status}: {body}"));
        }
        Ok(())
    }
}

// ============================================================================
// Adapter
// ============================================================================

/// Document store over the Firestore REST surface.
///
/// Authenticates the way the original deployment does: a web API key as a
/// query parameter, with access control left to the project's store rules.
pub struct FirestoreDocumentStore {
    http: Arc<dyn FirestoreHttp>,
    base_url: String,
    api_key: String,
}

impl FirestoreDocumentStore {
    pub fn new(project_id: &str, api_key: &str) -> Self {
        tracing::info!(project_id, "Using Firestore document store");
        Self {
            http: Arc::new(ReqwestFirestoreHttp {
                client: reqwest::Client::new(),
            }),
            base_url: format!(
                "{FIRESTORE_HOST}/projects/{project_id}/databases/(default)/documents"
            ),
            api_key: api_key.to_string(),
        }
    }

    #[cfg(test)]
    fn with_http(http: Arc<dyn FirestoreHttp>, project_id: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: format!(
                "{FIRESTORE_HOST}/projects/{project_id}/databases/(default)/documents"
            ),
            api_key: api_key.to_string(),
        }
    }

    fn document_url(&self, collection: &str, key: &str, extra: &str) -> String {
        format!(
            "{}/{}/{}?key={}{}",
            self.base_url,
            collection,
            percent_encode(key),
            self.api_key,
            extra
        )
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}?key={}", self.base_url, collection, self.api_key)
    }

    fn mask_params(document: &Value) -> String {
        let mut params = String::new();
        if let Some(map) = document.as_object() {
            for name in map.keys() {
                params.push_str("&updateMask.fieldPaths=");
                params.push_str(&percent_encode(name));
            }
        }
        params
    }
}

fn document_key_from_name(name: &str) -> String {
    name.rsplit('/').next().unwrap_or(name).to_string()
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        let url = self.document_url(collection, key, "");
        let response = self.http.get(&url).await.map_err(map_transport_error)?;
        match response {
            None => Ok(None),
            Some(doc) => {
                let fields = doc.get("fields").cloned().unwrap_or_else(|| json!({}));
                Ok(Some(from_firestore_fields(&fields)?))
            }
        }
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        value: Value,
        merge: bool,
    ) -> Result<(), DocumentStoreError> {
        // PATCH creates the document when absent. Without an update mask the
        // field set is replaced wholesale; with one, unlisted fields survive.
        let extra = if merge { Self::mask_params(&value) } else { String::new() };
        let url = self.document_url(collection, key, &extra);
        let body = json!({ "fields": to_firestore_fields(&value)? });
        self.http.patch(&url, body).await.map_err(map_transport_error)
    }

    async fn update_fields(
        &self,
        collection: &str,
        key: &str,
        fields: Value,
    ) -> Result<(), DocumentStoreError> {
        // The exists precondition keeps this from creating documents, which
        // is what distinguishes it from a merge write.
        let extra = format!("{}&currentDocument.exists=true", Self::mask_params(&fields));
        let url = self.document_url(collection, key, &extra);
        let body = json!({ "fields": to_firestore_fields(&fields)? });
        self.http.patch(&url, body).await.map_err(map_transport_error)
    }

    async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<(String, Value)>, DocumentStoreError> {
        let url = self.collection_url(collection);
        let response = self
            .http
            .get(&url)
            .await
            .map_err(map_transport_error)?
            .unwrap_or_else(|| json!({}));

        let mut out = Vec::new();
        if let Some(documents) = response.get("documents").and_then(Value::as_array) {
            for doc in documents {
                let name = doc.get("name").and_then(Value::as_str).unwrap_or_default();
                let fields = doc.get("fields").cloned().unwrap_or_else(|| json!({}));
                out.push((document_key_from_name(name), from_firestore_fields(&fields)?));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(String),
        Patch(String, Value),
    }

    struct FakeFirestoreHttp {
        calls: Mutex<Vec<Call>>,
        get_result: Mutex<Result<Option<Value>, String>>,
        patch_result: Mutex<Result<(), String>>,
    }

    impl FakeFirestoreHttp {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                get_result: Mutex::new(Ok(None)),
                patch_result: Mutex::new(Ok(())),
            })
        }

        fn set_get_result(&self, result: Result<Option<Value>, String>) {
            *self.get_result.lock().unwrap() = result;
        }

        fn set_patch_result(&self, result: Result<(), String>) {
            *self.patch_result.lock().unwrap() = result;
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FirestoreHttp for FakeFirestoreHttp {
        async fn get(&self, url: &str) -> Result<Option<Value>, String> {
            self.calls.lock().unwrap().push(Call::Get(url.to_string()));
            self.get_result.lock().unwrap().clone()
        }

        async fn patch(&self, url: &str, body: Value) -> Result<(), String> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Patch(url.to_string(), body));
            self.patch_result.lock().unwrap().clone()
        }
    }

    fn store(fake: Arc<FakeFirestoreHttp>) -> FirestoreDocumentStore {
        FirestoreDocumentStore::with_http(fake, "demo-project", "test-key")
    }

    // -----------------------
    // value mapping
    // -----------------------

    #[test]
    fn test_value_mapping_round_trips_nested_document() {
        let doc = json!({
            "category": "Technical Skills",
            "items": [
                { "name": "AI", "proficiency": 80, "description": "desc" }
            ],
            "enabled": true,
            "empty": []
        });

        let fields = to_firestore_fields(&doc).unwrap();
        assert_eq!(fields["category"]["stringValue"], "Technical Skills");
        assert_eq!(
            fields["items"]["arrayValue"]["values"][0]["mapValue"]["fields"]["proficiency"]
                ["integerValue"],
            "80"
        );

        let back = from_firestore_fields(&fields).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_empty_array_value_without_values_key_decodes() {
        let fields = json!({ "items": { "arrayValue": {} } });
        let back = from_firestore_fields(&fields).unwrap();
        assert_eq!(back, json!({ "items": [] }));
    }

    #[test]
    fn test_percent_encoding_of_natural_keys() {
        assert_eq!(percent_encode("Self Employed"), "Self%20Employed");
        assert_eq!(
            percent_encode("Integers: Beyond the Decimal Point"),
            "Integers%3A%20Beyond%20the%20Decimal%20Point"
        );
    }

    // -----------------------
    // adapter operations
    // -----------------------

    #[tokio::test]
    async fn test_get_document_absent_maps_to_none() {
        let fake = FakeFirestoreHttp::new();
        let result = store(fake.clone()).get_document("personalInfo", "main").await;
        assert_eq!(result, Ok(None));

        let calls = fake.calls();
        assert_eq!(
            calls[0],
            Call::Get(
                "https://firestore.googleapis.com/v1/projects/demo-project/databases/(default)\
                 /documents/personalInfo/main?key=test-key"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_get_document_decodes_fields() {
        let fake = FakeFirestoreHttp::new();
        fake.set_get_result(Ok(Some(json!({
            "name": "projects/demo/databases/(default)/documents/education/BSc",
            "fields": { "degree": { "stringValue": "BSc" } }
        }))));

        let doc = store(fake)
            .get_document("education", "BSc")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc, json!({ "degree": "BSc" }));
    }

    #[tokio::test]
    async fn test_merge_write_carries_update_mask() {
        let fake = FakeFirestoreHttp::new();
        store(fake.clone())
            .set_document("projects", "My Project", json!({ "role": "Lead" }), true)
            .await
            .unwrap();

        match &fake.calls()[0] {
            Call::Patch(url, body) => {
                assert!(url.contains("/projects/My%20Project?key=test-key"));
                assert!(url.contains("updateMask.fieldPaths=role"));
                assert!(!url.contains("currentDocument.exists"));
                assert_eq!(body["fields"]["role"]["stringValue"], "Lead");
            }
            other => panic!("expected PATCH, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_replace_write_has_no_mask() {
        let fake = FakeFirestoreHttp::new();
        store(fake.clone())
            .set_document("projects", "p", json!({ "role": "Lead" }), false)
            .await
            .unwrap();

        match &fake.calls()[0] {
            Call::Patch(url, _) => assert!(!url.contains("updateMask")),
            other => panic!("expected PATCH, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_fields_requires_document_to_exist() {
        let fake = FakeFirestoreHttp::new();
        store(fake.clone())
            .update_fields("experience", "Acme", json!({ "position": "Removed" }))
            .await
            .unwrap();

        match &fake.calls()[0] {
            Call::Patch(url, _) => {
                assert!(url.contains("currentDocument.exists=true"));
                assert!(url.contains("updateMask.fieldPaths=position"));
            }
            other => panic!("expected PATCH, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_documents_extracts_keys_from_resource_names() {
        let fake = FakeFirestoreHttp::new();
        fake.set_get_result(Ok(Some(json!({
            "documents": [
                {
                    "name": "projects/demo/databases/(default)/documents/skills/Business Skills",
                    "fields": { "category": { "stringValue": "Business Skills" } }
                },
                {
                    "name": "projects/demo/databases/(default)/documents/skills/Technical Skills",
                    "fields": { "category": { "stringValue": "Technical Skills" } }
                }
            ]
        }))));

        let docs = store(fake).list_documents("skills").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].0, "Business Skills");
        assert_eq!(docs[1].1, json!({ "category": "Technical Skills" }));
    }

    #[tokio::test]
    async fn test_empty_collection_listing() {
        let fake = FakeFirestoreHttp::new();
        fake.set_get_result(Ok(Some(json!({}))));

        let docs = store(fake).list_documents("skills").await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_maps_to_unavailable() {
        let fake = FakeFirestoreHttp::new();
        fake.set_patch_result(Err("connection refused".to_string()));

        let err = store(fake)
            .set_document("projects", "p", json!({ "role": "x" }), false)
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentStoreError::Unavailable(msg) if msg.contains("refused")));
    }
}

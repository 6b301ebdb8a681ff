use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationRequestBody<'a> {
    pub user_name: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
}

/// Envelope returned by the mutating food endpoints.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    #[serde(rename = "msg", default)]
    pub message: Option<String>,
    #[serde(rename = "foodId", default)]
    pub food_id: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Food {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Description", default)]
    pub description: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
    Copy,
    Move,
    Test,
}

/// A single JSON-patch instruction sent to `PATCH /api/Food/Edit/{id}`.
///
/// `copy` and `move` read from `from`; the others carry a `value` where one
/// is needed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PatchOperation {
    pub path: String,
    pub op: PatchOp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl PatchOperation {
    fn with_value(op: PatchOp, path: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            path: path.into(),
            op,
            value: Some(value),
            from: None,
        }
    }

    fn with_source(op: PatchOp, from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            op,
            value: None,
            from: Some(from.into()),
        }
    }

    pub fn add(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(PatchOp::Add, path, value.into())
    }

    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(PatchOp::Replace, path, value.into())
    }

    pub fn test(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(PatchOp::Test, path, value.into())
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            op: PatchOp::Remove,
            value: None,
            from: None,
        }
    }

    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_source(PatchOp::Copy, from, path)
    }

    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_source(PatchOp::Move, from, path)
    }
}

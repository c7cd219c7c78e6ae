use serde::{Deserialize, Serialize};

use crate::api::{is_default, ResultInfo};

/// Basic field set for `/User` transactions.
///
/// Empty fields are left out of the JSON payload, so an update only touches what is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserData {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub mobile: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub locale: String,

    // The remaining fields are only sent by the API on retrieval.
    #[serde(skip_serializing_if = "is_default")]
    pub special_product_availability: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub scope: String,

    #[serde(skip_serializing_if = "is_default")]
    pub active: bool,

    #[serde(skip_serializing_if = "is_default")]
    pub two_factor_enabled: bool,

    /// Unix time.
    #[serde(skip_serializing_if = "is_default")]
    pub insert_date: i64,

    /// Unix time.
    #[serde(skip_serializing_if = "is_default")]
    pub last_update_date: i64,

    /// Unix time.
    #[serde(skip_serializing_if = "is_default")]
    pub last_password_change_date: i64,
}

/// Request for `POST /User`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(flatten)]
    pub user: UserData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateUserResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub roles: Vec<String>,
}

/// Request for `POST /User/:UsernameOrUserId`.
///
/// The user is addressed through the path only; `username_or_user_id` is never part of the
/// JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip)]
    pub username_or_user_id: String,

    #[serde(flatten)]
    pub user: UserData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateUserResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub id: i64,
}

/// Request for `GET /User/:UsernameOrUserId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserRequest {
    #[serde(rename = "UsernameOrUserId")]
    pub username_or_user_id: String,
}

impl GetUserRequest {
    pub fn new(username_or_user_id: impl Into<String>) -> Self {
        Self {
            username_or_user_id: username_or_user_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetUserResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub id: i64,

    #[serde(flatten)]
    pub user: UserData,
}

/// Request for `DELETE /User/:UsernameOrUserId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    #[serde(rename = "UsernameOrUserId")]
    pub username_or_user_id: String,
}

impl DeleteUserRequest {
    pub fn new(username_or_user_id: impl Into<String>) -> Self {
        Self {
            username_or_user_id: username_or_user_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteUserResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_user_body_has_no_user_id() {
        let req = UpdateUserRequest {
            username_or_user_id: "jdoe".to_owned(),
            user: UserData {
                full_name: "John Doe".to_owned(),
                roles: vec!["PROCUREMENT".to_owned()],
                ..Default::default()
            },
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "FullName": "John Doe", "Roles": ["PROCUREMENT"] })
        );
    }

    #[test]
    fn test_decode_get_user() {
        let res: GetUserResult = serde_json::from_str(
            r#"{
            "success": true,
            "Id": 42,
            "FullName": "John Doe",
            "Username": "jdoe",
            "Active": true,
            "TwoFactorEnabled": true,
            "InsertDate": 1514764800
            }"#,
        )
        .unwrap();

        assert!(res.info.success);
        assert_eq!(res.id, 42);
        assert_eq!(res.user.username, "jdoe");
        assert!(res.user.two_factor_enabled);
        assert_eq!(res.user.insert_date, 1514764800);
    }
}

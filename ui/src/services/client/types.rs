// Wire types for the authentication API endpoints
use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// Request body for the account existence check.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CheckUserRequest {
    pub email: String,
    pub role: Role,
}

/// Response body for the account existence check.
///
/// `exists` defaults to false so a body without the field reads as
/// account-not-found, exactly as a truthiness check would.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CheckUserResponse {
    #[serde(default)]
    pub exists: bool,
}

/// Request body for the credential check.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Server decision on a login attempt.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub user_id: Option<u64>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub error: Option<String>,
}

/// Request body for account creation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: Role,
    /// Sent only for mentors who filled the field in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
}

/// Server decision on a registration attempt.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub user_id: Option<u64>,
    pub role: Option<Role>,
    pub error: Option<String>,
}

/// The four discrete values persisted to `sessionStorage` after a
/// successful login or registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub user_id: u64,
    pub user_name: String,
    pub user_email: String,
    pub user_role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase_on_the_wire() {
        let request = CheckUserRequest {
            email: "jane@example.com".to_string(),
            role: Role::Mentor,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"role\":\"mentor\""));
    }

    #[test]
    fn expertise_is_omitted_when_absent() {
        let request = RegisterRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "555-0101".to_string(),
            password: "secret99".to_string(),
            role: Role::Student,
            expertise: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("expertise"));

        let with_field = RegisterRequest {
            expertise: Some("Mathematics".to_string()),
            role: Role::Mentor,
            ..request
        };
        let json = serde_json::to_string(&with_field).unwrap();
        assert!(json.contains("\"expertise\":\"Mathematics\""));
    }

    #[test]
    fn sparse_login_response_still_parses() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":false,"error":"Invalid password"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Invalid password"));
        assert!(response.user_id.is_none());
        assert!(response.user_name.is_none());
    }

    #[test]
    fn body_without_exists_reads_as_not_found() {
        let response: CheckUserResponse =
            serde_json::from_str(r#"{"error":"unknown role"}"#).unwrap();
        assert!(!response.exists);
    }

    #[test]
    fn full_login_response_parses_typed_fields() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"success":true,"user_id":7,"user_name":"Jane Doe","email":"jane@example.com","role":"mentor"}"#,
        )
        .unwrap();
        assert!(response.success);
        assert_eq!(response.user_id, Some(7));
        assert_eq!(response.role, Some(Role::Mentor));
    }
}

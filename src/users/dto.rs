use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::users::domain::User;

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub team_id: Option<i64>,
}

/// Body of `PUT /users/:id`; every field is written.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub team_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub team_id: Option<i64>,
    #[serde(with = "crate::timestamp::iso_local")]
    pub created_at: PrimitiveDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id(),
            name: u.name().to_owned(),
            email: u.email().to_owned(),
            team_id: u.team_id(),
            created_at: u.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_camel_case_and_missing_team() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@x.com","teamId":3}"#).unwrap();
        assert_eq!(req.team_id, Some(3));

        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@x.com"}"#).unwrap();
        assert_eq!(req.team_id, None);
    }
}

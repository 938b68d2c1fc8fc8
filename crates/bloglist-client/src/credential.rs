use bloglist_core::api::LoginResponse;
use std::fmt;

/// Bearer credential for authenticated calls.
///
/// Debug output never shows the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// A logged-in user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub name: String,
    credential: Credential,
}

impl Session {
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

impl From<LoginResponse> for Session {
    fn from(res: LoginResponse) -> Self {
        Self {
            username: res.username,
            name: res.name,
            credential: Credential::new(res.token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let credential = Credential::new("secret.jwt.value");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.header_value(), "Bearer secret.jwt.value");
    }

    #[test]
    fn test_session_from_login_response() {
        let session = Session::from(LoginResponse {
            token: "t".to_string(),
            username: "root".to_string(),
            name: "Root".to_string(),
        });
        assert_eq!(session.credential().token(), "t");
        assert_eq!(session.username, "root");
    }
}

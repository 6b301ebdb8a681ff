use secrecy::Secret;

/// Username and password exchanged once for an access token.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

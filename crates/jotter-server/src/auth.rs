//! Password hashing and credential verification.
//!
//! Digests are argon2id PHC strings (`$argon2id$v=19$m=…,t=…,p=…$salt$hash`),
//! so the algorithm, cost parameters and salt travel with the hash.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use jotter_core::{Error, Result, account::AccountId, store::CredentialStore};
use rand_core::OsRng;

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| Error::Hashing(e.to_string()))
}

/// Check `password` against a stored digest in constant time.
///
/// A malformed digest is a mismatch, not an error.
pub fn verify_password(password: &str, digest: &str) -> bool {
  PasswordHash::new(digest)
    .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
    .is_ok()
}

/// [`hash_password`] off the async runtime.
pub async fn hash_password_blocking(password: String) -> Result<String> {
  tokio::task::spawn_blocking(move || hash_password(&password))
    .await
    .map_err(|e| Error::Hashing(e.to_string()))?
}

/// [`verify_password`] off the async runtime. With no stored digest the
/// password is checked against a dummy digest and the result is always false.
async fn verify_password_blocking(password: String, digest: Option<String>) -> Result<bool> {
  tokio::task::spawn_blocking(move || match digest {
    Some(digest) => verify_password(&password, &digest),
    None => {
      verify_password(&password, DUMMY_DIGEST);
      false
    }
  })
  .await
  .map_err(|e| Error::Hashing(e.to_string()))
}

/// Digest verified against when the username is unknown, so both failure
/// paths cost one argon2 evaluation. Uses the same parameters as
/// [`hash_password`]; no password is known to match it.
const DUMMY_DIGEST: &str = "$argon2id$v=19$m=19456,t=2,p=1$am90dGVyZHVtbXlzYWx0IQ$\
                            aFGLAfE2Dq8ElhSsEa5dDaYFMxBCSLxFW+KqbWlaZkk";

/// Resolve `username`/`password` to an account id.
///
/// An unknown user and a wrong password both yield [`Error::Unauthorized`].
/// The account id is looked up only after the password has matched.
pub async fn authenticate<S>(store: &S, username: &str, password: &str) -> Result<AccountId>
where
  S: CredentialStore,
{
  let digest = match store.lookup_hash(username).await.map_err(Into::<Error>::into) {
    Ok(digest) => Some(digest),
    Err(Error::UserNotFound(_)) => None,
    Err(e) => return Err(e),
  };

  if !verify_password_blocking(password.to_owned(), digest).await? {
    tracing::warn!(username, "authentication failed");
    return Err(Error::Unauthorized);
  }

  match store.lookup_id(username).await.map_err(Into::<Error>::into) {
    Ok(id) => Ok(id),
    Err(Error::UserNotFound(_)) => Err(Error::Unauthorized),
    Err(e) => Err(e),
  }
}

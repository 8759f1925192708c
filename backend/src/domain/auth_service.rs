//! Signup and login orchestration.
//!
//! The service owns the credential policy: passwords never reach a store in
//! the clear, and a failed login answers identically whether the username is
//! unknown or the password is wrong.

use std::sync::Arc;

use crate::domain::ports::{PasswordHasher, TokenIssuer, UserRepository, UserStoreError};
use crate::domain::{Error, LoginCredentials, NewUser, SignupForm};

/// Authentication service backed by a user store, a password hasher, and a
/// token issuer.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new account and return the generated user id.
    ///
    /// The store's unique constraint on `username` is the arbiter under
    /// concurrent signups; a violation surfaces as a conflict.
    pub async fn signup(&self, form: &SignupForm) -> Result<i32, Error> {
        let password_hash = self.hash_password(form.password().to_owned()).await?;
        let user = NewUser {
            name: form.name().to_owned(),
            email: form.email().to_owned(),
            phone: form.phone().to_owned(),
            username: form.username().to_owned(),
            password_hash,
            role: form.role().to_owned(),
        };

        self.users.insert(&user).await.map_err(map_user_store_error)
    }

    /// Validate credentials and mint a short-lived bearer token.
    ///
    /// Unknown usernames and wrong passwords produce byte-identical
    /// rejections so the endpoint does not leak which accounts exist.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, Error> {
        let stored = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_store_error)?;

        let Some(user) = stored else {
            return Err(invalid_credentials());
        };

        let matched = self
            .verify_password(credentials.password().to_owned(), user.password_hash.clone())
            .await?;
        if !matched {
            return Err(invalid_credentials());
        }

        self.tokens
            .issue(user.user_id, &user.username)
            .map_err(|err| Error::internal(format!("failed to issue token: {err}")))
    }

    /// Run the adaptive hash on a blocking thread; it is CPU-bound by design.
    async fn hash_password(&self, password: String) -> Result<String, Error> {
        let hasher = Arc::clone(&self.hasher);
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(|err| Error::internal(format!("password hashing failed: {err}")))?;
        Ok(hash)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))?
            .map_err(|err| Error::internal(format!("password verification failed: {err}")))
    }
}

fn invalid_credentials() -> Error {
    Error::unauthorized("Invalid username or password")
}

fn map_user_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::DuplicateUsername => Error::conflict("Username already exists"),
        UserStoreError::Connection { message } | UserStoreError::Query { message } => {
            Error::internal(message)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::domain::StoredUser;
    use crate::domain::ports::{PasswordHashError, TokenClaims, TokenError};
    use crate::domain::{ErrorCode, SignupForm};

    #[derive(Default)]
    struct StubState {
        users: Vec<StoredUser>,
        next_id: i32,
        insert_error: Option<UserStoreError>,
    }

    #[derive(Default)]
    struct StubUserRepository {
        state: Mutex<StubState>,
    }

    impl StubUserRepository {
        fn with_user(user: StoredUser) -> Self {
            Self {
                state: Mutex::new(StubState {
                    users: vec![user],
                    next_id: 2,
                    insert_error: None,
                }),
            }
        }

        fn failing_with(error: UserStoreError) -> Self {
            Self {
                state: Mutex::new(StubState {
                    users: Vec::new(),
                    next_id: 1,
                    insert_error: Some(error),
                }),
            }
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepository {
        async fn insert(&self, user: &NewUser) -> Result<i32, UserStoreError> {
            let mut state = self.state.lock().expect("stub state poisoned");
            if let Some(error) = state.insert_error.take() {
                return Err(error);
            }
            state.next_id += 1;
            let id = state.next_id - 1;
            state.users.push(StoredUser {
                user_id: id,
                username: user.username.clone(),
                password_hash: user.password_hash.clone(),
            });
            Ok(id)
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<StoredUser>, UserStoreError> {
            let state = self.state.lock().expect("stub state poisoned");
            Ok(state.users.iter().find(|u| u.username == username).cloned())
        }
    }

    /// Reversible stand-in so tests can assert on stored "hashes".
    struct StubHasher;

    impl PasswordHasher for StubHasher {
        fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
            Ok(format!("hashed:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    struct StubIssuer;

    impl TokenIssuer for StubIssuer {
        fn issue(&self, user_id: i32, username: &str) -> Result<String, TokenError> {
            Ok(format!("token-{user_id}-{username}"))
        }

        fn verify(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Err(TokenError::invalid())
        }
    }

    fn make_service(users: StubUserRepository) -> AuthService {
        AuthService::new(Arc::new(users), Arc::new(StubHasher), Arc::new(StubIssuer))
    }

    fn sample_form() -> SignupForm {
        SignupForm::try_from_parts(
            "Asha Rao",
            "asha@example.com",
            "0771234567",
            "asha",
            "s3cret",
            "officer",
        )
        .expect("sample form is valid")
    }

    fn stored_asha() -> StoredUser {
        StoredUser {
            user_id: 1,
            username: "asha".to_owned(),
            password_hash: "hashed:s3cret".to_owned(),
        }
    }

    #[tokio::test]
    async fn signup_hashes_password_before_storing() {
        let repo = StubUserRepository::default();
        {
            let mut state = repo.state.lock().expect("stub state poisoned");
            state.next_id = 7;
        }
        let service = make_service(repo);

        let user_id = service.signup(&sample_form()).await.expect("signup succeeds");
        assert_eq!(user_id, 7);

        let found = service
            .users
            .find_by_username("asha")
            .await
            .expect("lookup succeeds")
            .expect("user stored");
        assert_eq!(
            found,
            StoredUser {
                user_id: 7,
                username: "asha".to_owned(),
                password_hash: "hashed:s3cret".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn signup_surfaces_duplicate_username_as_conflict() {
        let repo = StubUserRepository::failing_with(UserStoreError::duplicate_username());
        let service = make_service(repo);

        let err = service
            .signup(&sample_form())
            .await
            .expect_err("duplicate must fail");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "Username already exists");
    }

    #[tokio::test]
    async fn login_mints_token_for_valid_credentials() {
        let service = make_service(StubUserRepository::with_user(stored_asha()));
        let credentials =
            LoginCredentials::try_from_parts("asha", "s3cret").expect("credentials valid");

        let token = service.login(&credentials).await.expect("login succeeds");
        assert_eq!(token, "token-1-asha");
    }

    #[rstest]
    #[case("asha", "wrong")]
    #[case("nobody", "s3cret")]
    #[tokio::test]
    async fn login_rejections_are_indistinguishable(
        #[case] username: &str,
        #[case] password: &str,
    ) {
        let service = make_service(StubUserRepository::with_user(stored_asha()));
        let credentials =
            LoginCredentials::try_from_parts(username, password).expect("credentials parse");

        let err = service.login(&credentials).await.expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Invalid username or password");
    }

    struct FailingRepo;

    #[async_trait]
    impl UserRepository for FailingRepo {
        async fn insert(&self, _user: &NewUser) -> Result<i32, UserStoreError> {
            Err(UserStoreError::query("insert failed"))
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<StoredUser>, UserStoreError> {
            Err(UserStoreError::connection("pool exhausted"))
        }
    }

    #[tokio::test]
    async fn login_store_fault_is_internal_not_unauthorized() {
        let service =
            AuthService::new(Arc::new(FailingRepo), Arc::new(StubHasher), Arc::new(StubIssuer));
        let credentials =
            LoginCredentials::try_from_parts("asha", "s3cret").expect("credentials valid");

        let err = service.login(&credentials).await.expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}

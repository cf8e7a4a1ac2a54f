pub mod login;
pub mod register;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::{
    requests::{LoginRequest, RegisterRequest},
    responses::LoginResponse,
};
use crate::models::users::entities::User;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

pub struct AuthService {
    storage: Arc<dyn Storage>,
    jwt: JwtUtils,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>, jwt: JwtUtils) -> Self {
        Self { storage, jwt }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn jwt(&self) -> &JwtUtils {
        &self.jwt
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        login::handle_login(self, request).await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        register::handle_register(self, request).await
    }
}

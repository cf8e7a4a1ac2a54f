use crate::config::JwtConfig;
use crate::models::auth::entities::AuthUser;
use crate::models::users::entities::UserRole;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ACCESS_TOKEN: &str = "access";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (user ID)
    pub role: String,       // 用户角色
    pub name: String,       // 显示名（full_name）
    pub token_type: String, // token类型，目前只签发 "access"
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

impl Claims {
    /// 从 claims 推导当前用户，sub 无法解析时返回 None
    pub fn to_auth_user(&self) -> Option<AuthUser> {
        let user_id = self.sub.parse::<i64>().ok()?;
        Some(AuthUser {
            user_id,
            role: UserRole::parse_or_user(&self.role),
            full_name: self.name.clone(),
        })
    }
}

/// JWT 签发与校验
///
/// 启动时由配置构建一次，作为 `web::Data` 注入。
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: chrono::Duration,
}

impl JwtUtils {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_token_expiry: chrono::Duration::minutes(config.access_token_expiry),
        }
    }

    /// access token 有效期（秒）
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_token_expiry.num_seconds()
    }

    // 生成 Access Token
    pub fn generate_access_token(
        &self,
        user_id: i64,
        role: UserRole,
        full_name: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.generate_token_with_expiry(
            user_id,
            role,
            full_name,
            ACCESS_TOKEN,
            self.access_token_expiry,
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        &self,
        user_id: i64,
        role: UserRole,
        full_name: &str,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            name: full_name.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    // 验证 JWT token
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::default();
        decode::<Claims>(token, &self.decoding_key, &validation).map(|token_data| token_data.claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = self.verify_token(token)?;
        if claims.token_type != ACCESS_TOKEN {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }
}

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::entities::{NewUser, UserRole};
use crate::storage::Storage;
use crate::utils::password::hash_password;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
/// 如果数据库中没有任何用户，则创建一个默认的 admin 账号
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    // 优先使用环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin = NewUser {
        username: "admin".to_string(),
        email: "admin@localhost".to_string(),
        password_hash,
        role: UserRole::Admin,
        job_position: None,
        full_name: "Administrator".to_string(),
        gender: None,
        dob: None,
        start_date: None,
    };

    match storage.create_user(admin).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文：加密后端、存储与迁移、默认管理员
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    // 重复安装只会返回 Err，不影响已有的 provider
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{seed_user, storage};

    #[test]
    fn random_password_uses_charset() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.len(), 16);
        assert!(pwd.chars().all(|c| c.is_ascii_graphic()));
    }

    #[tokio::test]
    async fn seeds_admin_only_into_empty_database() {
        let storage = storage().await;
        seed_admin(&storage).await;
        let admin = storage.get_user_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(storage.count_users().await.unwrap(), 1);

        seed_admin(&storage).await;
        assert_eq!(storage.count_users().await.unwrap(), 1);

        let other = crate::services::test_support::storage().await;
        seed_user(&other, "teacher1", "Tran Thi B").await;
        seed_admin(&other).await;
        assert!(other.get_user_by_username("admin").await.unwrap().is_none());
    }
}

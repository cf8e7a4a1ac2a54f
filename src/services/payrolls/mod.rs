use std::sync::Arc;

use tracing::info;

use crate::errors::{HWSystemError, Result};
use crate::models::auth::entities::AuthUser;
use crate::models::payrolls::{entities::PayrollType, requests::CreatePayrollRequest};
use crate::services::ensure_elevated;
use crate::storage::Storage;
use crate::utils::validate::non_empty;

pub struct PayrollService {
    storage: Arc<dyn Storage>,
}

impl PayrollService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 新建薪资类型，名称唯一
    pub async fn create_payroll_type(
        &self,
        caller: &AuthUser,
        request: CreatePayrollRequest,
    ) -> Result<PayrollType> {
        ensure_elevated(caller, "create payroll types")?;

        let type_name = non_empty(Some(request.type_name))
            .ok_or_else(|| HWSystemError::validation("type_name is required"))?;
        if self
            .storage
            .get_payroll_type_by_name(&type_name)
            .await?
            .is_some()
        {
            return Err(HWSystemError::conflict(format!(
                "Payroll type '{type_name}' already exists"
            )));
        }

        let payroll = self
            .storage
            .create_payroll_type(type_name, non_empty(request.description))
            .await?;
        info!(
            "User {} created payroll type {} ({})",
            caller.user_id, payroll.id, payroll.type_name
        );
        Ok(payroll)
    }

    pub async fn list_payroll_types(&self) -> Result<Vec<PayrollType>> {
        self.storage.list_payroll_types().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::services::test_support::{caller, storage};

    fn request(name: &str) -> CreatePayrollRequest {
        CreatePayrollRequest {
            type_name: name.to_string(),
            description: Some("  ".to_string()),
        }
    }

    #[tokio::test]
    async fn create_and_list() {
        let service = PayrollService::new(storage().await);
        let admin = caller(1, UserRole::Admin);

        let created = service
            .create_payroll_type(&admin, request(" IELTS "))
            .await
            .unwrap();
        assert_eq!(created.type_name, "IELTS");
        assert_eq!(created.description, None);

        let err = service
            .create_payroll_type(&admin, request("IELTS"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E007");

        let err = service
            .create_payroll_type(&admin, request(""))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");

        assert_eq!(service.list_payroll_types().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn plain_user_cannot_create() {
        let service = PayrollService::new(storage().await);
        let err = service
            .create_payroll_type(&caller(2, UserRole::User), request("TOEIC"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");
    }
}

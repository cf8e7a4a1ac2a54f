use super::{SeaOrmStorage, map_write_err};
use crate::entity::payrolls::{ActiveModel, Column, Entity as Payrolls};
use crate::errors::{HWSystemError, Result};
use crate::models::payrolls::entities::PayrollType;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_payroll_type_impl(
        &self,
        type_name: String,
        description: Option<String>,
    ) -> Result<PayrollType> {
        let model = ActiveModel {
            type_name: Set(type_name),
            description: Set(description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, "创建薪资类型失败", "Payroll type already exists"))?;

        Ok(result.into_payroll_type())
    }

    pub async fn get_payroll_type_by_id_impl(&self, id: i64) -> Result<Option<PayrollType>> {
        let result = Payrolls::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询薪资类型失败: {e}")))?;

        Ok(result.map(|m| m.into_payroll_type()))
    }

    pub async fn get_payroll_type_by_name_impl(
        &self,
        type_name: &str,
    ) -> Result<Option<PayrollType>> {
        let result = Payrolls::find()
            .filter(Column::TypeName.eq(type_name))
            .one(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询薪资类型失败: {e}")))?;

        Ok(result.map(|m| m.into_payroll_type()))
    }

    pub async fn list_payroll_types_impl(&self) -> Result<Vec<PayrollType>> {
        let result = Payrolls::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询薪资类型失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_payroll_type()).collect())
    }
}

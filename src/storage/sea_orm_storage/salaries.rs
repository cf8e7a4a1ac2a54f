use std::collections::{BTreeMap, HashMap};

use super::SeaOrmStorage;
use crate::entity::prelude::{Classes, Courses, EmployeeRates, Payrolls, Salaries, Users};
use crate::entity::{classes, employee_rates, salaries};
use crate::errors::{HWSystemError, Result};
use crate::models::salaries::{
    entities::{EmployeeRate, SalaryLine, SalaryPeriod, SalaryReportLine},
    requests::RateEntry,
};
use crate::storage::TaughtSessions;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 周期的 [开始, 下月开始)
fn period_bounds(period: SalaryPeriod) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(period.year, period.month as u32, 1);
    let end = if period.month == 12 {
        NaiveDate::from_ymd_opt(period.year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(period.year, period.month as u32 + 1, 1)
    };
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(HWSystemError::validation(format!(
            "Invalid period {}/{}",
            period.month, period.year
        ))),
    }
}

impl SeaOrmStorage {
    /// 薪资报表：薪资记录关联用户与薪资类型
    pub async fn list_salary_report_impl(
        &self,
        period: SalaryPeriod,
        user_id: Option<i64>,
    ) -> Result<Vec<SalaryReportLine>> {
        let mut query = Salaries::find()
            .filter(salaries::Column::Month.eq(period.month))
            .filter(salaries::Column::Year.eq(period.year));
        if let Some(uid) = user_id {
            query = query.filter(salaries::Column::UserId.eq(uid));
        }

        let rows = query
            .order_by_asc(salaries::Column::UserId)
            .order_by_asc(salaries::Column::PayrollId)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询薪资失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let payroll_names: HashMap<i64, String> = Payrolls::find()
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询薪资类型失败: {e}")))?
            .into_iter()
            .map(|p| (p.id, p.type_name))
            .collect();

        let lines = rows
            .into_iter()
            .filter_map(|(salary, user)| {
                let user = user?;
                Some(SalaryReportLine {
                    user_id: salary.user_id,
                    username: user.username,
                    full_name: user.full_name,
                    gender: user.gender,
                    job_position: user.job_position,
                    payroll_id: salary.payroll_id,
                    type_payroll: payroll_names
                        .get(&salary.payroll_id)
                        .cloned()
                        .unwrap_or_default(),
                    month: salary.month,
                    year: salary.year,
                    total_work_dates: salary.total_work_dates,
                    payroll_rate: salary.payroll_rate,
                    salary: salary.salary,
                })
            })
            .collect();

        Ok(lines)
    }

    /// 批量写入员工单价
    ///
    /// 逐条按 (user_id, payroll_id) 查找后更新或插入；任一条失败整批回滚。
    pub async fn upsert_employee_rates_impl(
        &self,
        user_id: i64,
        rates: Vec<RateEntry>,
    ) -> Result<Vec<EmployeeRate>> {
        self.transaction(move |txn| {
            Box::pin(async move {
                let now = chrono::Utc::now().timestamp();
                let mut saved = Vec::with_capacity(rates.len());

                for entry in rates {
                    if Payrolls::find_by_id(entry.payroll_id).one(txn).await?.is_none() {
                        return Err(HWSystemError::not_found(format!(
                            "Payroll type {} not found",
                            entry.payroll_id
                        )));
                    }

                    let existing = EmployeeRates::find()
                        .filter(employee_rates::Column::UserId.eq(user_id))
                        .filter(employee_rates::Column::PayrollId.eq(entry.payroll_id))
                        .one(txn)
                        .await?;

                    let model = match existing {
                        Some(row) => {
                            let mut active: employee_rates::ActiveModel = row.into();
                            active.rate = Set(entry.rate);
                            active.updated_at = Set(now);
                            active.update(txn).await?
                        }
                        None => {
                            employee_rates::ActiveModel {
                                user_id: Set(user_id),
                                payroll_id: Set(entry.payroll_id),
                                rate: Set(entry.rate),
                                updated_at: Set(now),
                                ..Default::default()
                            }
                            .insert(txn)
                            .await?
                        }
                    };
                    saved.push(model.into_employee_rate());
                }

                Ok(saved)
            })
        })
        .await
    }

    pub async fn list_employee_rates_impl(&self, user_id: i64) -> Result<Vec<EmployeeRate>> {
        let rows = EmployeeRates::find()
            .filter(employee_rates::Column::UserId.eq(user_id))
            .order_by_asc(employee_rates::Column::PayrollId)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询员工单价失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_employee_rate()).collect())
    }

    /// 统计当月授课次数，按 (教师, 课程薪资类型) 分组
    pub async fn count_taught_sessions_impl(
        &self,
        period: SalaryPeriod,
    ) -> Result<Vec<TaughtSessions>> {
        let (start, end) = period_bounds(period)?;

        let rows = Classes::find()
            .filter(classes::Column::ClassDate.gte(start))
            .filter(classes::Column::ClassDate.lt(end))
            .find_also_related(Courses)
            .all(&self.db)
            .await
            .map_err(|e| HWSystemError::database_operation(format!("查询课时失败: {e}")))?;

        let mut counts: BTreeMap<(i64, i64), i64> = BTreeMap::new();
        for (class, course) in rows {
            if let Some(course) = course {
                *counts.entry((class.teacher_id, course.payroll_id)).or_default() += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|((user_id, payroll_id), sessions)| TaughtSessions {
                user_id,
                payroll_id,
                sessions,
            })
            .collect())
    }

    /// 替换某月全部薪资记录
    pub async fn replace_salary_lines_impl(
        &self,
        period: SalaryPeriod,
        lines: Vec<SalaryLine>,
    ) -> Result<u64> {
        self.transaction(move |txn| {
            Box::pin(async move {
                Salaries::delete_many()
                    .filter(salaries::Column::Month.eq(period.month))
                    .filter(salaries::Column::Year.eq(period.year))
                    .exec(txn)
                    .await?;

                let mut written = 0u64;
                for line in lines {
                    salaries::ActiveModel {
                        user_id: Set(line.user_id),
                        payroll_id: Set(line.payroll_id),
                        month: Set(line.month),
                        year: Set(line.year),
                        total_work_dates: Set(line.total_work_dates),
                        payroll_rate: Set(line.payroll_rate),
                        salary: Set(line.salary),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    written += 1;
                }

                Ok(written)
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_bounds_wraps_december() {
        let (start, end) = period_bounds(SalaryPeriod {
            month: 12,
            year: 2024,
        })
        .unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }
}

use std::collections::HashMap;

use tracing::info;

use super::SalaryService;
use crate::errors::Result;
use crate::models::auth::entities::AuthUser;
use crate::models::salaries::entities::{SalaryLine, SalaryReportLine};
use crate::services::ensure_elevated;
use crate::utils::validate::validate_period;

/// 授课次数 × 单价，未配置单价按 0 计；整月结果在一个事务里替换
pub async fn compute_salary(
    service: &SalaryService,
    caller: &AuthUser,
    month: i64,
    year: i64,
) -> Result<Vec<SalaryReportLine>> {
    ensure_elevated(caller, "compute salaries")?;
    let period = validate_period(month, year)?;
    let storage = service.storage();

    let taught = storage.count_taught_sessions(period).await?;

    let mut rates: HashMap<i64, HashMap<i64, f64>> = HashMap::new();
    let mut lines = Vec::with_capacity(taught.len());
    for entry in taught {
        if !rates.contains_key(&entry.user_id) {
            let user_rates = storage
                .list_employee_rates(entry.user_id)
                .await?
                .into_iter()
                .map(|r| (r.payroll_id, r.rate))
                .collect();
            rates.insert(entry.user_id, user_rates);
        }
        let rate = rates
            .get(&entry.user_id)
            .and_then(|r| r.get(&entry.payroll_id))
            .copied()
            .unwrap_or(0.0);

        lines.push(SalaryLine {
            user_id: entry.user_id,
            payroll_id: entry.payroll_id,
            month: period.month,
            year: period.year,
            total_work_dates: entry.sessions,
            payroll_rate: rate,
            salary: rate * entry.sessions as f64,
        });
    }

    let written = storage.replace_salary_lines(period, lines).await?;
    info!(
        "User {} computed {} salary line(s) for {}/{}",
        caller.user_id, written, period.month, period.year
    );

    storage.list_salary_report(period, None).await
}

#[cfg(test)]
mod tests {
    use crate::models::courses::entities::NewClassSession;
    use crate::models::salaries::requests::{ModifySalaryConfigurationRequest, RateEntry};
    use crate::models::users::entities::UserRole;
    use crate::services::SalaryService;
    use crate::services::test_support::{caller, date, seed_course, storage};

    #[tokio::test]
    async fn computes_sessions_times_rate() {
        let storage = storage().await;
        let (teacher_id, payroll_id, course_id) = seed_course(&storage).await;
        for day in [2, 9, 16, 23] {
            storage
                .create_class_session(NewClassSession {
                    course_id,
                    teacher_id,
                    class_date: date(2024, 4, day),
                    start_time: None,
                    end_time: None,
                    room: None,
                    note: None,
                })
                .await
                .unwrap();
        }
        let service = SalaryService::new(storage);
        let admin = caller(1, UserRole::Admin);

        // 未配置单价
        let lines = service.compute_salary(&admin, 4, 2024).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].total_work_dates, 4);
        assert_eq!(lines[0].salary, 0.0);

        service
            .modify_salary_configuration(
                &admin,
                ModifySalaryConfigurationRequest {
                    user_id: teacher_id,
                    rates: vec![RateEntry {
                        payroll_id,
                        rate: 250.0,
                    }],
                },
            )
            .await
            .unwrap();

        let lines = service.compute_salary(&admin, 4, 2024).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].payroll_rate, 250.0);
        assert_eq!(lines[0].salary, 1000.0);
        assert_eq!(lines[0].type_payroll, "IELTS");
    }

    #[tokio::test]
    async fn plain_user_cannot_compute() {
        let service = SalaryService::new(storage().await);
        let err = service
            .compute_salary(&caller(3, UserRole::User), 4, 2024)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E011");
    }
}

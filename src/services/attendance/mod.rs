pub mod record;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::attendance::{
    entities::Attendance,
    requests::{FixAttendanceRequest, RecordAttendanceRequest},
};
use crate::models::auth::entities::AuthUser;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Arc<dyn Storage>,
}

impl AttendanceService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 点名
    pub async fn record_attendance(
        &self,
        caller: &AuthUser,
        request: RecordAttendanceRequest,
    ) -> Result<Vec<Attendance>> {
        record::record_attendance(self, caller, request).await
    }

    // 修正单条出勤
    pub async fn update_attendance_status(
        &self,
        caller: &AuthUser,
        request: FixAttendanceRequest,
    ) -> Result<Attendance> {
        update::update_attendance_status(self, caller, request).await
    }
}

//! 学生导入服务
//!
//! 先整体解析、逐行校验，全部通过后才在一个事务里写入。

use std::collections::HashMap;
use std::io::Cursor;

use actix_multipart::Multipart;
use calamine::{Data, DataType, Reader, Xlsx};
use futures_util::StreamExt;
use tracing::info;

use super::StudentService;
use crate::errors::{HWSystemError, Result};
use crate::models::students::{entities::NewStudent, responses::ImportStudentsResponse};
use crate::utils::validate::{non_empty, parse_date, validate_email};

/// 导入行数据（尚未校验）
#[derive(Debug, Clone, Default)]
struct ImportRow {
    row_num: usize,
    name: String,
    dob: String,
    email: Option<String>,
    phone_number: Option<String>,
}

/// 表头列下标
struct Columns {
    name: usize,
    dob: usize,
    email: Option<usize>,
    phone_number: Option<usize>,
}

impl Columns {
    fn from_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Result<Self> {
        let map: HashMap<String, usize> = headers
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        let name = map
            .get("name")
            .or_else(|| map.get("student_name"))
            .copied()
            .ok_or_else(|| HWSystemError::validation("Missing required column: name"))?;
        let dob = map
            .get("dob")
            .copied()
            .ok_or_else(|| HWSystemError::validation("Missing required column: dob"))?;

        Ok(Self {
            name,
            dob,
            email: map.get("email").copied(),
            phone_number: map.get("phone_number").copied(),
        })
    }
}

pub async fn import_students(
    service: &StudentService,
    mut payload: Multipart,
    course_id: i64,
) -> Result<ImportStudentsResponse> {
    let (file_bytes, file_name) =
        read_file_from_multipart(&mut payload, service.upload().max_size).await?;
    import_from_bytes(service, &file_bytes, &file_name, course_id).await
}

pub(crate) async fn import_from_bytes(
    service: &StudentService,
    file_bytes: &[u8],
    file_name: &str,
    course_id: i64,
) -> Result<ImportStudentsResponse> {
    let rows = if file_name.to_lowercase().ends_with(".xlsx") {
        parse_xlsx(file_bytes)?
    } else {
        parse_csv(file_bytes)?
    };

    if rows.is_empty() {
        return Err(HWSystemError::validation("File contains no data rows"));
    }
    let max_rows = service.upload().max_import_rows;
    if rows.len() > max_rows {
        return Err(HWSystemError::validation(format!(
            "At most {max_rows} rows can be imported at once"
        )));
    }

    let students = rows
        .into_iter()
        .map(validate_row)
        .collect::<Result<Vec<_>>>()?;

    let students = service
        .storage()
        .enroll_students(course_id, students)
        .await?;

    info!(
        "Imported {} student(s) from {} into course {}",
        students.len(),
        file_name,
        course_id
    );

    Ok(ImportStudentsResponse {
        course_id,
        imported: students.len(),
        students,
    })
}

async fn read_file_from_multipart(
    payload: &mut Multipart,
    max_size: usize,
) -> Result<(Vec<u8>, String)> {
    let mut file_bytes = Vec::new();
    let mut file_name = String::new();
    let mut seen_file = false;

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| HWSystemError::validation(format!("Failed to read field: {e}")))?;

        if field.name() != Some("file") {
            continue;
        }
        if seen_file {
            return Err(HWSystemError::validation("Only one 'file' field is allowed"));
        }
        seen_file = true;

        file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload.csv")
            .to_string();

        while let Some(chunk) = field.next().await {
            let data = chunk
                .map_err(|e| HWSystemError::validation(format!("Failed to read file: {e}")))?;
            if file_bytes.len() + data.len() > max_size {
                return Err(HWSystemError::validation(format!(
                    "File exceeds the {max_size} byte limit"
                )));
            }
            file_bytes.extend_from_slice(&data);
        }
    }

    if file_bytes.is_empty() {
        return Err(HWSystemError::validation("Missing or empty 'file' field"));
    }

    Ok((file_bytes, file_name))
}

fn parse_csv(data: &[u8]) -> Result<Vec<ImportRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(data));

    let headers = rdr
        .headers()
        .map_err(|e| HWSystemError::validation(format!("Failed to read header: {e}")))?;
    let columns = Columns::from_headers(headers.iter())?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        // 1-based，跳过表头
        let row_num = idx + 2;
        let record = result
            .map_err(|e| HWSystemError::validation(format!("Row {row_num}: {e}")))?;
        let get = |i: usize| record.get(i).unwrap_or("").to_string();

        rows.push(ImportRow {
            row_num,
            name: get(columns.name),
            dob: get(columns.dob),
            email: columns.email.map(get),
            phone_number: columns.phone_number.map(get),
        });
    }

    Ok(rows)
}

fn parse_xlsx(data: &[u8]) -> Result<Vec<ImportRow>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| HWSystemError::validation(format!("Failed to open xlsx: {e}")))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| HWSystemError::validation("Workbook has no sheets"))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| HWSystemError::validation(format!("Failed to read sheet: {e}")))?;

    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        return Ok(Vec::new());
    };
    let header_cells: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();
    let columns = Columns::from_headers(header_cells.iter().map(String::as_str))?;

    let mut rows = Vec::new();
    for (idx, row) in rows_iter.enumerate() {
        let get = |i: usize| row.get(i).map(cell_text).unwrap_or_default();
        let parsed = ImportRow {
            row_num: idx + 2,
            name: get(columns.name),
            dob: get(columns.dob),
            email: columns.email.map(get),
            phone_number: columns.phone_number.map(get),
        };
        // 跳过完全空白的行
        if parsed.name.is_empty() && parsed.dob.is_empty() {
            continue;
        }
        rows.push(parsed);
    }

    Ok(rows)
}

// 日期格式的单元格转成 YYYY-MM-DD
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        _ => cell.to_string().trim().to_string(),
    }
}

fn validate_row(row: ImportRow) -> Result<NewStudent> {
    let row_num = row.row_num;
    let student_name = non_empty(Some(row.name))
        .ok_or_else(|| HWSystemError::validation(format!("Row {row_num}: name is required")))?;
    let dob = parse_date(&row.dob, "dob")
        .map_err(|e| HWSystemError::validation(format!("Row {row_num}: {}", e.message())))?;
    let email = non_empty(row.email);
    if let Some(email) = &email {
        validate_email(email)
            .map_err(|msg| HWSystemError::validation(format!("Row {row_num}: {msg}")))?;
    }

    Ok(NewStudent {
        student_name,
        dob,
        email,
        phone_number: non_empty(row.phone_number),
    })
}

#![cfg(not(coverage))]

use super::*;
use crate::utils::download::DownloadSink;
use httpmock::prelude::*;
use serde_json::json;
use std::{cell::RefCell, time::Duration};

fn employee_json(id: i64, activo: bool) -> serde_json::Value {
    json!({
        "id": id,
        "identificacion": format!("10{id:05}"),
        "nombre": "Laura",
        "apellido": "Gómez",
        "cargo": "Analista",
        "departamento": "Finanzas",
        "fechaIngreso": "2023-02-01",
        "fechaSalida": null,
        "activo": activo
    })
}

fn payload() -> EmployeePayload {
    EmployeePayload {
        id: None,
        identificacion: "1234567".into(),
        nombre: "Laura".into(),
        apellido: "Gómez".into(),
        cargo: "Analista".into(),
        departamento: "Finanzas".into(),
        fecha_ingreso: chrono::NaiveDate::from_ymd_opt(2023, 2, 1),
        fecha_salida: None,
        activo: true,
    }
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[derive(Default)]
struct RecordingSink {
    saved: RefCell<Vec<DownloadedFile>>,
}

impl DownloadSink for RecordingSink {
    fn save(&self, file: &DownloadedFile) -> Result<(), ApiError> {
        self.saved.borrow_mut().push(file.clone());
        Ok(())
    }
}

#[tokio::test]
async fn employee_endpoints_succeed() {
    let server = MockServer::start_async().await;

    let list = server.mock(|when, then| {
        when.method(GET).path("/api/empleados/todos");
        then.status(200)
            .json_body(json!([employee_json(1, true), employee_json(2, false)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/empleados/1");
        then.status(200).json_body(employee_json(1, true));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/empleados/registrar")
            .json_body_partial(r#"{"identificacion":"1234567","fechaIngreso":"2023-02-01"}"#);
        then.status(201);
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/empleados/1");
        then.status(200).json_body(employee_json(1, true));
    });
    let toggle = server.mock(|when, then| {
        when.method(httpmock::Method::PATCH)
            .path("/api/empleados/2/estado")
            .query_param("activo", "true");
        then.status(200).json_body(employee_json(2, true));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/empleados/1");
        then.status(204);
    });

    let client = api_client(&server);
    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert!(!employees[1].activo);
    list.assert();

    let fetched = client.get_employee(1).await.unwrap().unwrap();
    assert_eq!(fetched.nombre, "Laura");

    let message = client.create_employee(&payload()).await.unwrap();
    assert_eq!(message, EMPLOYEE_SAVED_MESSAGE);
    create.assert();

    let updated = client.update_employee(1, &payload()).await.unwrap();
    assert_eq!(updated.map(|e| e.id), Some(1));

    let toggled = client.set_employee_active(2, true).await.unwrap();
    assert!(toggled.unwrap().activo);
    toggle.assert();

    client.delete_employee(1).await.unwrap();
}

#[tokio::test]
async fn missing_employee_reads_as_absent() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/empleados/5");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/empleados/6");
        then.status(404).json_body(json!({ "error": "no existe" }));
    });

    let client = api_client(&server);
    assert!(client.get_employee(5).await.unwrap().is_none());
    assert!(client.get_employee(6).await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_prefers_error_field_then_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/api/empleados/3");
        then.status(400)
            .json_body(json!({ "error": "Identificación duplicada", "message": "otro" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/empleados/todos");
        then.status(500);
    });

    let client = api_client(&server);
    let err = client.update_employee(3, &payload()).await.unwrap_err();
    assert_eq!(err.error, "Identificación duplicada");
    assert_eq!(err.code, ApiError::VALIDATION_ERROR);

    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.error, "Error al obtener empleados");
    assert_eq!(err.code, ApiError::SERVER_ERROR);
}

#[tokio::test]
async fn delete_blocked_by_records_is_classified() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/empleados/9");
        then.status(500).json_body(json!({
            "error": "could not execute statement; violación de restricción de llave foránea"
        }));
    });

    let err = api_client(&server).delete_employee(9).await.unwrap_err();
    assert!(err.is(ApiError::EMPLOYEE_HAS_RECORDS));
}

#[tokio::test]
async fn csv_upload_posts_multipart_and_returns_message() {
    let server = MockServer::start_async().await;
    let upload = server.mock(|when, then| {
        when.method(POST)
            .path("/api/empleados/upload-csv")
            .header_exists("content-type")
            .body_contains("name=\"file\"")
            .body_contains("identificacion,nombre");
        then.status(200).json_body(json!({ "message": "3 empleados importados" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/empleados/upload-csv").body_contains("vacio");
        then.status(200);
    });

    let client = api_client(&server);
    let message = client
        .upload_employees_csv("empleados.csv", b"identificacion,nombre\n123456,Ana\n".to_vec())
        .await
        .unwrap();
    assert_eq!(message, "3 empleados importados");
    upload.assert();

    let message = client
        .upload_employees_csv("vacio.csv", b"vacio".to_vec())
        .await
        .unwrap();
    assert_eq!(message, EMPLOYEES_IMPORTED_MESSAGE);
}

#[tokio::test]
async fn shift_record_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/registros");
        then.status(200).json_body(json!([
            { "id": 1, "employee": { "id": 3, "nombre": "Ana", "apellido": "Gil" },
              "tipo": "SALIDA", "fechaHora": "2024-01-02T08:00:00" }
        ]));
    });
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/registros").json_body(json!({
            "employeeId": 3, "tipo": "ENTRADA", "fechaHora": "2024-01-03T07:59:00"
        }));
        then.status(201).json_body(json!({
            "id": 2, "employeeId": 3, "tipo": "ENTRADA", "fechaHora": "2024-01-03T07:59:00"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/registros/empleado/3");
        then.status(204);
    });

    let client = api_client(&server);
    let records = client.list_shift_records().await.unwrap();
    assert_eq!(records[0].owner_id(), Some(3));

    let created = client
        .create_shift_record(&CreateShiftRecord {
            employee_id: 3,
            tipo: ShiftKind::Entrada,
            fecha_hora: "2024-01-03T07:59:00".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.map(|r| r.id), Some(2));
    create.assert();

    assert!(client.shift_records_for_employee(3).await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_list_rows_are_skipped_not_fatal() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/registros");
        then.status(200).json_body(json!([
            { "id": 1, "employeeId": 3, "tipo": "ENTRADA", "fechaHora": "2024-01-02T08:00:00" },
            { "id": 2, "employeeId": 3, "tipo": "DESCANSO", "fechaHora": "2024-01-02T12:00:00" },
            { "id": 3, "employeeId": 3, "tipo": null, "fechaHora": "2024-01-02T17:00:00" },
            { "id": "x", "tipo": "SALIDA" }
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/empleados/todos");
        then.status(200)
            .json_body(json!([employee_json(1, true), { "nombre": "sin id" }, employee_json(2, true)]));
    });

    let client = api_client(&server);
    let records = client.list_shift_records().await.unwrap();
    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(records[0].tipo, Some(ShiftKind::Entrada));
    assert_eq!(records[1].tipo, None);
    assert_eq!(records[2].kind_display(), "—");
    assert_eq!(records[2].kind_key(), "");

    let employees = client.list_employees().await.unwrap();
    assert_eq!(employees.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn admin_login_sends_credentials_as_query() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/login")
            .query_param("correo", "admin@room911.co")
            .query_param("contrasena", "s3cret&x");
        then.status(200)
            .json_body(json!({ "correo": "admin@room911.co", "rol": "ADMIN" }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/login")
            .query_param("contrasena", "bad");
        then.status(401).json_body(json!({ "error": "Credenciales inválidas" }));
    });

    let client = api_client(&server);
    let session = client
        .login(&AdminLoginRequest {
            correo: "admin@room911.co".into(),
            contrasena: "s3cret&x".into(),
        })
        .await
        .unwrap();
    assert!(session.role.is_admin());

    let err = client
        .login(&AdminLoginRequest {
            correo: "admin@room911.co".into(),
            contrasena: "bad".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Credenciales inválidas");
    assert!(err.is(ApiError::UNAUTHORIZED));
}

#[tokio::test]
async fn pdf_export_uses_content_disposition_or_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/employees/pdf");
        then.status(200)
            .header("content-type", "application/pdf")
            .header("content-disposition", "attachment; filename=\"empleados_2024.pdf\"")
            .body("%PDF-1.4");
    });
    let range = server.mock(|when, then| {
        when.method(GET)
            .path("/api/reports/shifts/pdf")
            .query_param("from", "2024-01-01T00:00:00");
        then.status(200).body("%PDF-1.4");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/employee/7/pdf");
        then.status(200).body("%PDF-1.4");
    });

    let client = api_client(&server);
    let sink = RecordingSink::default();

    let name = client.export_employees_pdf(&sink).await.unwrap();
    assert_eq!(name, "empleados_2024.pdf");

    let range_filter = ShiftRange::from_inputs("2024-01-01T00:00", "").unwrap();
    let name = client
        .export_shifts_pdf_range(&sink, &range_filter)
        .await
        .unwrap();
    assert_eq!(name, reports::SHIFTS_RANGE_PDF_NAME);
    range.assert();

    let name = client.export_employee_history_pdf(&sink, 7).await.unwrap();
    assert_eq!(name, "historial_turnos_7.pdf");

    let saved = sink.saved.borrow();
    assert_eq!(saved.len(), 3);
    assert_eq!(saved[0].content_type, "application/pdf");
    assert_eq!(saved[0].bytes, b"%PDF-1.4");
}

#[tokio::test]
async fn failed_pdf_export_never_reaches_the_sink() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/shifts/pdf");
        then.status(500).body("No hay registros para exportar");
    });

    let sink = RecordingSink::default();
    let err = api_client(&server)
        .export_shifts_pdf(&sink)
        .await
        .unwrap_err();
    assert_eq!(err.error, "No hay registros para exportar");
    assert!(sink.saved.borrow().is_empty());
}

#[tokio::test]
async fn invalid_range_is_rejected_before_any_request() {
    let server = MockServer::start_async().await;
    let pdf = server.mock(|when, then| {
        when.method(GET).path("/api/reports/shifts/pdf");
        then.status(200).body("%PDF");
    });

    let sink = RecordingSink::default();
    let err = api_client(&server)
        .export_shifts_pdf_range(&sink, &ShiftRange::default())
        .await
        .unwrap_err();
    assert!(err.is(ApiError::VALIDATION_ERROR));
    pdf.assert_hits(0);
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/registros");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!([]));
    });

    let client = api_client(&server).with_timeouts(crate::config::Timeouts {
        request: Duration::from_millis(50),
        download: Duration::from_millis(50),
    });
    let err = client.list_shift_records().await.unwrap_err();
    assert!(err.is(ApiError::TIMEOUT));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = client.list_employees().await.unwrap_err();
    assert!(err.is_transport());
}

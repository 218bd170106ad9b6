use super::{
    client::{failure, send, with_timeout, ApiClient},
    types::{ApiError, DownloadedFile},
};
use crate::utils::download::DownloadSink;
use percent_encoding::percent_decode_str;
use reqwest::{
    header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    Method,
};

pub const EMPLOYEES_PDF_NAME: &str = "reporte_empleados.pdf";
pub const SHIFTS_PDF_NAME: &str = "reporte_registros_turno.pdf";
pub const SHIFTS_RANGE_PDF_NAME: &str = "reporte_registros_turno_rango.pdf";

pub fn employee_history_pdf_name(employee_id: i64) -> String {
    format!("historial_turnos_{employee_id}.pdf")
}

/// Extracts the filename from a `Content-Disposition` value. `filename*` (RFC 5987) wins
/// over `filename`; percent-escapes are decoded in both.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;
    for param in header.split(';').map(str::trim) {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        match name.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let encoded = value
                    .split_once("''")
                    .map(|(_, rest)| rest)
                    .unwrap_or(value);
                extended = Some(encoded.to_string());
            }
            "filename" => plain = Some(value.to_string()),
            _ => {}
        }
    }
    extended
        .or(plain)
        .map(|raw| percent_decode_str(&raw).decode_utf8_lossy().into_owned())
        .filter(|name| !name.trim().is_empty())
}

/// `datetime-local` inputs omit seconds; the backend expects `YYYY-MM-DDTHH:MM:SS`.
pub fn normalize_range_bound(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    match trimmed.len() {
        0 => None,
        16 => Some(format!("{trimmed}:00")),
        _ => Some(trimmed.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl ShiftRange {
    pub fn from_inputs(from: &str, to: &str) -> Result<Self, ApiError> {
        let range = Self {
            from: normalize_range_bound(from),
            to: normalize_range_bound(to),
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        match (&self.from, &self.to) {
            (None, None) => Err(ApiError::validation(
                "Selecciona al menos una fecha/hora (Desde o Hasta).",
            )),
            (Some(from), Some(to)) => {
                let parsed = (
                    super::types::parse_local_timestamp(from),
                    super::types::parse_local_timestamp(to),
                );
                match parsed {
                    (Some(from), Some(to)) if from > to => Err(ApiError::validation(
                        "La fecha \"Desde\" no puede ser posterior a \"Hasta\".",
                    )),
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(from) = &self.from {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &self.to {
            params.push(("to", to.clone()));
        }
        params
    }
}

impl ApiClient {
    /// Fetches a generated PDF. Non-success statuses fail before any bytes are returned.
    pub async fn download_pdf(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        fallback_name: &str,
    ) -> Result<DownloadedFile, ApiError> {
        let mut request = self.request(Method::GET, path).await;
        if !query.is_empty() {
            request = request.query(query);
        }
        let limit = self.timeouts().await.download;
        let fallback_name = fallback_name.to_string();
        with_timeout(limit, async move {
            let response = send(request, limit).await?;
            if !response.status().is_success() {
                return Err(failure(response, "Error al generar PDF").await);
            }
            let headers = response.headers();
            let filename = headers
                .get(CONTENT_DISPOSITION)
                .and_then(|value| value.to_str().ok())
                .and_then(filename_from_content_disposition)
                .unwrap_or(fallback_name);
            let content_type = headers
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("application/pdf")
                .to_string();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| ApiError::request_failed(format!("Error al descargar el PDF: {e}")))?
                .to_vec();
            Ok(DownloadedFile {
                filename,
                content_type,
                bytes,
            })
        })
        .await
    }

    async fn export_pdf(
        &self,
        sink: &dyn DownloadSink,
        path: &str,
        query: &[(&'static str, String)],
        fallback_name: &str,
    ) -> Result<String, ApiError> {
        let file = self.download_pdf(path, query, fallback_name).await?;
        sink.save(&file)?;
        Ok(file.filename)
    }

    pub async fn export_employees_pdf(&self, sink: &dyn DownloadSink) -> Result<String, ApiError> {
        self.export_pdf(sink, "/reports/employees/pdf", &[], EMPLOYEES_PDF_NAME)
            .await
    }

    pub async fn export_shifts_pdf(&self, sink: &dyn DownloadSink) -> Result<String, ApiError> {
        self.export_pdf(sink, "/reports/shifts/pdf", &[], SHIFTS_PDF_NAME)
            .await
    }

    pub async fn export_shifts_pdf_range(
        &self,
        sink: &dyn DownloadSink,
        range: &ShiftRange,
    ) -> Result<String, ApiError> {
        range.validate()?;
        self.export_pdf(
            sink,
            "/reports/shifts/pdf",
            &range.query(),
            SHIFTS_RANGE_PDF_NAME,
        )
        .await
    }

    pub async fn export_employee_history_pdf(
        &self,
        sink: &dyn DownloadSink,
        employee_id: i64,
    ) -> Result<String, ApiError> {
        self.export_pdf(
            sink,
            &format!("/reports/employee/{employee_id}/pdf"),
            &[],
            &employee_history_pdf_name(employee_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_disposition_variants() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"empleados.pdf\"").as_deref(),
            Some("empleados.pdf")
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=turnos.pdf").as_deref(),
            Some("turnos.pdf")
        );
        assert_eq!(
            filename_from_content_disposition(
                "attachment; filename=\"x.pdf\"; filename*=UTF-8''reporte%20a%C3%B1o.pdf"
            )
            .as_deref(),
            Some("reporte año.pdf")
        );
        assert_eq!(filename_from_content_disposition("inline"), None);
        assert_eq!(filename_from_content_disposition("attachment; filename=\"\""), None);
    }

    #[test]
    fn range_bounds_gain_seconds() {
        assert_eq!(
            normalize_range_bound("2024-03-01T08:30").as_deref(),
            Some("2024-03-01T08:30:00")
        );
        assert_eq!(
            normalize_range_bound("2024-03-01T08:30:15").as_deref(),
            Some("2024-03-01T08:30:15")
        );
        assert_eq!(normalize_range_bound(""), None);
    }

    #[test]
    fn range_requires_a_bound_and_ordering() {
        let err = ShiftRange::from_inputs("", "").unwrap_err();
        assert!(err.is(ApiError::VALIDATION_ERROR));

        let err = ShiftRange::from_inputs("2024-03-02T00:00", "2024-03-01T00:00").unwrap_err();
        assert!(err.error.contains("posterior"));

        let only_to = ShiftRange::from_inputs("", "2024-03-01T10:00").unwrap();
        assert_eq!(only_to.query(), vec![("to", "2024-03-01T10:00:00".to_string())]);
    }

    #[test]
    fn history_name_embeds_employee_id() {
        assert_eq!(employee_history_pdf_name(42), "historial_turnos_42.pdf");
    }
}

use super::{
    client::ApiClient,
    types::{AdminLoginRequest, AdminSession, ApiError},
};
use reqwest::Method;

impl ApiClient {
    /// The backend authenticates with a query-string GET and answers `{ correo, rol }`.
    pub async fn login(&self, request: &AdminLoginRequest) -> Result<AdminSession, ApiError> {
        let builder = self
            .request(Method::GET, "/users/login")
            .await
            .query(&[
                ("correo", request.correo.as_str()),
                ("contrasena", request.contrasena.as_str()),
            ]);
        let body = self
            .execute(builder, "Usuario o contraseña incorrectos")
            .await?;
        body.decode::<AdminSession>().ok_or_else(|| {
            ApiError::new(
                ApiError::UNAUTHORIZED,
                "Respuesta de inicio de sesión inválida",
            )
        })
    }
}

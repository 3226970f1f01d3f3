use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::LoginError;

/// Valores del formulario en el momento del submit
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Respuesta del endpoint de login de empresa.
///
/// `data` es opaco: se guarda tal cual en localStorage para el resto de la app.
/// Solo se acepta un objeto JSON; los campos se leen de forma tolerante.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(from = "Map<String, Value>")]
pub struct LoginResponse {
    pub success: bool,
    pub data: Option<Value>,
    pub message: Option<String>,
}

impl From<Map<String, Value>> for LoginResponse {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            success: fields.get("success").map(truthy).unwrap_or(false),
            data: fields.remove("data").filter(|d| !d.is_null()),
            // Un `message` que no es texto se ignora
            message: fields
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

impl LoginResponse {
    /// Decodificar el cuerpo HTTP; cualquier cosa que no sea un objeto es un fallo de transporte
    pub fn from_body(body: &str) -> Result<Self, LoginError> {
        serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))
    }

    /// Mensaje del servidor utilizable en UI (los vacíos cuentan como ausentes)
    pub fn rejection_reason(&self) -> Option<String> {
        self.message
            .as_ref()
            .filter(|m| !m.trim().is_empty())
            .cloned()
    }
}

// El backend no siempre manda un booleano estricto: 1, "ok", etc.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

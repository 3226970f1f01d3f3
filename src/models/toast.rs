/// Notificación transitoria de éxito, se descarta sola tras `toast_duration_ms`
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

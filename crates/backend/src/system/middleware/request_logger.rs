use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

/// Размер ответа в человекочитаемом виде
fn format_size(bytes: usize) -> String {
    match bytes {
        0..=1023 => format!("{} B", bytes),
        1024..=1_048_575 => format!("{:.1} KB", bytes as f64 / 1024.0),
        _ => format!("{:.1} MB", bytes as f64 / 1_048_576.0),
    }
}

/// Middleware для логирования HTTP запросов
///
/// Одна строка на запрос: время, длительность, размер ответа, статус,
/// метод и путь. Ответы с кодом не 2xx подсвечиваются жёлтым.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (format_size(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {} {}: {}", method, path, e);
            ("error".to_string(), Body::default())
        }
    };

    let color_code = if parts.status.is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>9} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1_048_576), "3.0 MB");
    }
}

//! Transport-independent request and response values.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Size of a header block as `name: value\r\n` lines.
fn headers_size(headers: &[(String, String)]) -> u64 {
    headers
        .iter()
        .map(|(name, value)| (name.len() + 2 + value.len() + 2) as u64)
        .sum()
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl OutgoingRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Set a header, replacing any existing value regardless of name case.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    /// Bytes attributed to this request: URL, header lines and body.
    pub fn wire_size(&self) -> u64 {
        self.url.len() as u64
            + headers_size(&self.headers)
            + self.body.as_ref().map_or(0, |b| b.len() as u64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl IncomingResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Bytes attributed to this response: header lines and body.
    pub fn wire_size(&self) -> u64 {
        headers_size(&self.headers) + self.body.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_size_counts_url_headers_and_body() {
        let mut request = OutgoingRequest::new(HttpMethod::Post, "/api/x");
        assert_eq!(request.wire_size(), 6);

        request.set_header("Content-Type", "application/json");
        // "Content-Type: application/json\r\n" is 32 bytes
        assert_eq!(request.wire_size(), 6 + 32);

        request.body = Some(r#"{"a":1}"#.to_string());
        assert_eq!(request.wire_size(), 6 + 32 + 7);
    }

    #[test]
    fn headers_are_case_insensitive() {
        let mut request = OutgoingRequest::new(HttpMethod::Get, "/");
        request.set_header("authorization", "Bearer a");
        request.set_header("Authorization", "Bearer b");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("AUTHORIZATION"), Some("Bearer b"));
    }

    #[test]
    fn response_success_range() {
        let response = |status| IncomingResponse {
            status,
            headers: vec![("content-length".into(), "2".into())],
            body: "{}".into(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(301).is_success());
        assert!(!response(401).is_success());
        assert_eq!(response(200).wire_size(), "content-length: 2\r\n".len() as u64 + 2);
        assert_eq!(response(200).header("Content-Length"), Some("2"));
    }
}

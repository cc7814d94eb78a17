//! Client configuration.

/// Content-Type label placed on POST bodies.
///
/// The body is always URL-form-encoded; this only controls the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormContentType {
    /// `application/x-www-form-urlencoded`, matching the body.
    #[default]
    UrlEncoded,
    /// `application/json`, for servers that expect the legacy label.
    Json,
}

impl FormContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            FormContentType::UrlEncoded => "application/x-www-form-urlencoded",
            FormContentType::Json => "application/json",
        }
    }
}

/// Tunables for `HttpClient`. `Default` gives 1 KiB reads, header echo on
/// stdout, and a form-encoded Content-Type.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub read_chunk_size: usize,
    pub print_headers: bool,
    pub form_content_type: FormContentType,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_chunk_size: 1024,
            print_headers: true,
            form_content_type: FormContentType::default(),
        }
    }
}

impl ClientConfig {
    /// Size of each `read` call on the socket. Zero is bumped to one.
    pub fn with_read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size.max(1);
        self
    }

    pub fn with_print_headers(mut self, print: bool) -> Self {
        self.print_headers = print;
        self
    }

    pub fn with_form_content_type(mut self, content_type: FormContentType) -> Self {
        self.form_content_type = content_type;
        self
    }
}

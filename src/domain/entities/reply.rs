/// What a command handler hands back to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// Image attachment referenced by URL
    Photo(String),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn photo(url: impl Into<String>) -> Self {
        Reply::Photo(url.into())
    }

    /// Text body or photo URL, for logging
    pub fn preview(&self, max_chars: usize) -> String {
        match self {
            Reply::Text(text) => text.chars().take(max_chars).collect(),
            Reply::Photo(url) => format!("[photo] {}", url),
        }
    }
}

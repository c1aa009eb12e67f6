/// Error raised while producing extension documentation.
///
/// Any error means no document was produced.
#[derive(Debug)]
pub enum SerializationError {
    /// The output sink rejected a write.
    Io(std::io::Error),

    /// The XML event writer failed.
    Xml(quick_xml::Error),

    /// A JSON descriptor could not be read or written.
    Json(serde_json::Error),

    /// An element was closed that is not the innermost open element.
    Unbalanced {
        /// The innermost open element, if any.
        expected: Option<String>,
        /// The element that was closed.
        found: String,
    },

    /// The document ended with elements still open, outermost first.
    Unclosed(Vec<String>),

    /// Custom error message
    Custom(String),
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::Io(e) => write!(f, "IO error: {}", e),
            SerializationError::Xml(e) => write!(f, "XML error: {}", e),
            SerializationError::Json(e) => write!(f, "JSON error: {}", e),
            SerializationError::Unbalanced {
                expected: Some(expected),
                found,
            } => write!(
                f,
                "Unbalanced element: closing <{}> while <{}> is open",
                found, expected
            ),
            SerializationError::Unbalanced {
                expected: None,
                found,
            } => write!(f, "Unbalanced element: closing <{}> with no open element", found),
            SerializationError::Unclosed(names) => {
                write!(f, "Unclosed elements: {}", names.join(" > "))
            }
            SerializationError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializationError::Io(e) => Some(e),
            SerializationError::Xml(e) => Some(e),
            SerializationError::Json(e) => Some(e),
            SerializationError::Unbalanced { .. }
            | SerializationError::Unclosed(_)
            | SerializationError::Custom(_) => None,
        }
    }
}

impl From<std::io::Error> for SerializationError {
    fn from(err: std::io::Error) -> Self {
        SerializationError::Io(err)
    }
}

impl From<quick_xml::Error> for SerializationError {
    fn from(err: quick_xml::Error) -> Self {
        SerializationError::Xml(err)
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        SerializationError::Json(err)
    }
}

impl From<String> for SerializationError {
    fn from(msg: String) -> Self {
        SerializationError::Custom(msg)
    }
}

/// Result type alias for documentation writing
pub type Result<T> = std::result::Result<T, SerializationError>;

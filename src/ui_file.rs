//! Header sniffing for Qt Designer `.ui` documents
//!
//! Only the `<ui version="...">` root and the `<class>` element are read.
//! The result is used for diagnostics; the external compiler owns the format.

use crate::error::{DriverError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// What the first lines of a `.ui` file say about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiHeader {
    /// Format version from the root element, if present
    pub version: Option<String>,

    /// Name of the generated class (`<class>` element), if present
    pub class_name: Option<String>,

    /// Class of the top-level widget, e.g. `QDialog`
    pub root_widget: Option<String>,
}

pub struct UiSniffer {
    root_regex: Regex,
    version_regex: Regex,
    class_regex: Regex,
    widget_regex: Regex,
}

impl UiSniffer {
    pub fn new() -> Self {
        Self {
            root_regex: Regex::new(r"<ui(\s[^>]*)?>").unwrap(),
            version_regex: Regex::new(r#"version\s*=\s*["']([^"']*)["']"#).unwrap(),
            class_regex: Regex::new(r"<class>\s*([A-Za-z_][A-Za-z0-9_]*)\s*</class>").unwrap(),
            widget_regex: Regex::new(r#"<widget\s+class\s*=\s*["']([A-Za-z_][A-Za-z0-9_:]*)["']"#)
                .unwrap(),
        }
    }

    /// Returns `None` when the text has no `<ui>` root element.
    pub fn sniff(&self, source: &str) -> Option<UiHeader> {
        let root = self.root_regex.captures(source)?;
        let version = root
            .get(1)
            .and_then(|attrs| self.version_regex.captures(attrs.as_str()))
            .map(|caps| caps[1].to_string());

        let body = &source[root.get(0).map(|m| m.end()).unwrap_or(0)..];
        let class_name = self
            .class_regex
            .captures(body)
            .map(|caps| caps[1].to_string());
        let root_widget = self
            .widget_regex
            .captures(body)
            .map(|caps| caps[1].to_string());

        Some(UiHeader {
            version,
            class_name,
            root_widget,
        })
    }
}

impl Default for UiSniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiHeader {
    pub fn sniff(source: &str) -> Option<Self> {
        UiSniffer::new().sniff(source)
    }

    /// Read `path` and sniff its header.
    ///
    /// A missing file is `FileNotFound`; a file without a `<ui>` root is `Ok(None)`.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DriverError::file_not_found(path.display().to_string()),
            _ => DriverError::Io(e),
        })?;
        Ok(Self::sniff(&String::from_utf8_lossy(&bytes)))
    }
}

use crate::domain::ports::ServePolicy;

static MIME_OVERRIDES: [(&str, &str); 3] = [
    (".bin", "application/octet-stream"),
    (".json", "application/json"),
    (".js", "application/javascript"),
];

static QUIET_MARKERS: [&str; 5] = [".bin", ".json", ".js", ".css", ".ico"];

/// Content-type overrides and request-log filtering for the chat demo's
/// asset types. One concrete configuration of [`ServePolicy`].
#[derive(Debug, Clone)]
pub struct AssetPolicy {
    overrides: &'static [(&'static str, &'static str)],
    quiet_markers: &'static [&'static str],
}

impl AssetPolicy {
    pub fn new(
        overrides: &'static [(&'static str, &'static str)],
        quiet_markers: &'static [&'static str],
    ) -> Self {
        Self {
            overrides,
            quiet_markers,
        }
    }
}

impl Default for AssetPolicy {
    fn default() -> Self {
        Self::new(&MIME_OVERRIDES, &QUIET_MARKERS)
    }
}

impl ServePolicy for AssetPolicy {
    fn content_type_for(&self, path: &str) -> Option<&'static str> {
        self.overrides
            .iter()
            .find(|(suffix, _)| path.ends_with(suffix))
            .map(|(_, mime)| *mime)
    }

    // 用 contains 而非副檔名比對,帶查詢字串的資源請求也要靜音
    fn should_log(&self, path: &str) -> bool {
        !self.quiet_markers.iter().any(|marker| path.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_overrides() {
        let policy = AssetPolicy::default();

        assert_eq!(
            policy.content_type_for("/model/weights.bin"),
            Some("application/octet-stream")
        );
        assert_eq!(
            policy.content_type_for("/config.json"),
            Some("application/json")
        );
        assert_eq!(
            policy.content_type_for("/lib/web-llm.js"),
            Some("application/javascript")
        );
        assert_eq!(policy.content_type_for("/index.html"), None);
        assert_eq!(policy.content_type_for("/"), None);
    }

    #[test]
    fn test_quiet_assets_are_not_logged() {
        let policy = AssetPolicy::default();

        assert!(!policy.should_log("/lib/web-llm.js"));
        assert!(!policy.should_log("/model/weights.bin"));
        assert!(!policy.should_log("/styles.css"));
        assert!(!policy.should_log("/favicon.ico"));
        assert!(!policy.should_log("/config.json?v=2"));
    }

    #[test]
    fn test_page_requests_are_logged() {
        let policy = AssetPolicy::default();

        assert!(policy.should_log("/"));
        assert!(policy.should_log("/index.html"));
        assert!(policy.should_log("/about"));
    }
}

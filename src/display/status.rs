// src/display/status.rs

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Label shown when a record carries no status at all.
pub const UNDETERMINED_LABEL: &str = "Chưa xác định";

/// Presentation category for a status. Rendered as a CSS class suffix,
/// never shown to the user as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Success,
    Warning,
    Danger,
    Info,
    #[default]
    Neutral,
}

impl StyleTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::Success => "success",
            StyleTag::Warning => "warning",
            StyleTag::Danger => "danger",
            StyleTag::Info => "info",
            StyleTag::Neutral => "neutral",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synonym group: every raw token maps to `label` and `tag`.
struct StatusRule {
    tokens: &'static [&'static str],
    label: &'static str,
    tag: StyleTag,
}

// Tokens are stored already lower-cased.
const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        tokens: &["available"],
        label: "Sẵn sàng",
        tag: StyleTag::Success,
    },
    StatusRule {
        tokens: &["rented", "renting"],
        label: "Đang cho thuê",
        tag: StyleTag::Info,
    },
    StatusRule {
        tokens: &["maintenance"],
        label: "Đang bảo trì",
        tag: StyleTag::Warning,
    },
    StatusRule {
        tokens: &["pending"],
        label: "Chờ duyệt",
        tag: StyleTag::Warning,
    },
    StatusRule {
        tokens: &["approved"],
        label: "Đã duyệt",
        tag: StyleTag::Success,
    },
    StatusRule {
        tokens: &["confirmed"],
        label: "Đã xác nhận",
        tag: StyleTag::Success,
    },
    StatusRule {
        tokens: &["rejected"],
        label: "Bị từ chối",
        tag: StyleTag::Danger,
    },
    StatusRule {
        tokens: &["cancelled", "canceled"],
        label: "Đã hủy",
        tag: StyleTag::Danger,
    },
    StatusRule {
        tokens: &["completed"],
        label: "Hoàn thành",
        tag: StyleTag::Success,
    },
    StatusRule {
        tokens: &["returned"],
        label: "Đã trả máy",
        tag: StyleTag::Info,
    },
    StatusRule {
        tokens: &["active"],
        label: "Đang hoạt động",
        tag: StyleTag::Success,
    },
    StatusRule {
        tokens: &["inactive", "locked"],
        label: "Ngừng hoạt động",
        tag: StyleTag::Danger,
    },
];

static LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    STATUS_RULES
        .iter()
        .flat_map(|rule| rule.tokens.iter().map(move |token| (*token, rule.label)))
        .collect()
});

// Keyed by raw tokens and by the lower-cased labels, so a label that has
// already been resolved classifies the same way as its raw token.
static STYLE_TAGS: LazyLock<HashMap<String, StyleTag>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for rule in STATUS_RULES {
        for token in rule.tokens {
            map.insert(token.to_string(), rule.tag);
        }
        map.insert(rule.label.to_lowercase(), rule.tag);
    }
    map
});

fn normalize(status: &str) -> String {
    status.trim().to_lowercase()
}

/// Localized label for a raw status.
///
/// Missing or blank input yields [`UNDETERMINED_LABEL`]. Anything not in the
/// table is returned exactly as given, so unknown statuses stay visible.
pub fn resolve_display_label(status: Option<&str>) -> String {
    let Some(raw) = status else {
        return UNDETERMINED_LABEL.to_string();
    };

    let key = normalize(raw);
    if key.is_empty() {
        return UNDETERMINED_LABEL.to_string();
    }

    match LABELS.get(key.as_str()) {
        Some(label) => (*label).to_string(),
        None => {
            tracing::trace!(status = raw, "unrecognized status, echoing input");
            raw.to_string()
        }
    }
}

/// Style category for a raw status or for an already resolved label.
/// Unknown and blank input is [`StyleTag::Neutral`].
pub fn resolve_style_tag(status: Option<&str>) -> StyleTag {
    let key = match status {
        Some(raw) => normalize(raw),
        None => return StyleTag::Neutral,
    };

    STYLE_TAGS.get(&key).copied().unwrap_or_default()
}

/// True when `status` is one of the tokens or labels the tables know about.
pub fn is_known_status(status: &str) -> bool {
    STYLE_TAGS.contains_key(&normalize(status))
}

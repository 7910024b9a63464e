pub const NAV_LABELS: [&str; 6] = ["Home", "Guide", "API", "Examples", "Blog", "GitHub"];

/// 250 wide, five 100-wide links, no gap.
pub const NARROW_NAV_JSON: &str = r#"{
    "container": {"content_width": 250},
    "items": [
        {"content_width": 100},
        {"content_width": 100},
        {"content_width": 100},
        {"content_width": 100},
        {"content_width": 100}
    ],
    "config": {"gap": 0}
}"#;

/// Not-yet-mounted and zero-width slots mixed with measured ones.
pub const PARTIALLY_MOUNTED_JSON: &str = r#"{
    "container": {"content_width": 1000, "margin_left": 8},
    "items": [
        {"content_width": 100},
        null,
        {"content_width": 0},
        {"content_width": 100}
    ]
}"#;

pub const UNMOUNTED_CONTAINER_JSON: &str = r#"{
    "container": null,
    "items": [{"content_width": 100}]
}"#;

/// 400 wide, 100 reserved for a logo, 25 padding each side: 250 usable.
pub const TOOLBAR_TOML: &str = r#"
[container]
content_width = 400.0

[[items]]
content_width = 50.0

[[items]]
content_width = 50.0

[[items]]
content_width = 50.0

[[items]]
content_width = 50.0

[[items]]
content_width = 50.0

[[items]]
content_width = 50.0

[config]
gap = 0.0
reserved_width = 100.0
padding = 25.0
"#;

pub const FLOOR_OF_THREE_CONFIG: &str = r#"
version = 1

[overflow]
min_visible_items = 3
"#;

/// 50 wide, five 100-wide items.
pub const CRAMPED_JSON: &str = r#"{
    "container": {"content_width": 50},
    "items": [
        {"content_width": 100},
        {"content_width": 100},
        {"content_width": 100},
        {"content_width": 100},
        {"content_width": 100}
    ]
}"#;

//! Hard-coded targets and markup templates for the header rewrite.

/// Quotes table component, relative to the project root.
pub const QUOTES_FILE: &str = "client/src/components/quotes-updated.tsx";

/// Purchase-orders table component, relative to the project root.
pub const PURCHASE_ORDERS_FILE: &str = "client/src/components/purchase-orders-updated.tsx";

/// Files rewritten by a run, in processing order.
pub const TARGET_FILES: [&str; 2] = [QUOTES_FILE, PURCHASE_ORDERS_FILE];

/// Legacy sortable header: a plain `<button>` wrapping a `<span>` label and a small icon.
///
/// Capture group 1 is the label (any run of non-`<` characters).
pub const LEGACY_HEADER_PATTERN: &str = r#"<button\s+onClick=\{[^}]+\}\s+className="flex items-center space-x-1 hover:text-gray-700"\s*>\s*<span>([^<]+)</span>\s*<ArrowUpDown className="w-3 h-3" />\s*</button>"#;

/// Function invoked by the rewritten header's click handler.
pub const SORT_HANDLER: &str = "handleSort";

/// Styling applied to the rewritten `Button`.
pub const BUTTON_CLASS: &str = "h-auto p-0 font-medium text-gray-500 hover:text-gray-700";

/// Styling applied to the icon inside the rewritten `Button`.
pub const ICON_CLASS: &str = "ml-1 w-3 h-3";

/// Indentation of the label line inside the rewritten `Button`.
pub const LABEL_INDENT: &str = "                  ";

/// Indentation of the closing `</Button>` tag.
pub const CLOSE_INDENT: &str = "                ";

/// Printed once both files have been written.
pub const CONFIRMATION: &str = "Fixed all headers in both files!";

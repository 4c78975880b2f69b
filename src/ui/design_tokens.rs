// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

CSS values shared by the elements this layer creates or restyles. The page's
own stylesheet (Bootstrap) owns everything else.

## Organization

- **Palette**: Base colors
- **Spacing**: Offsets from the viewport edge
- **Sizing**: Component sizes
- **Radius**: Border radii
- **Shadow**: Box shadows
- **Layer**: Stacking order

## Examples

```
use ocr_lens::ui::design_tokens::{palette, spacing};

let css = format!("top: {}; background: {}", spacing::MD, palette::SUCCESS_500);
assert_eq!(css, "top: 20px; background: #43b367");
```
"#]

/// Base colors.
pub mod palette {
    pub const WHITE: &str = "#ffffff";

    // Severity colors
    pub const ERROR_500: &str = "#e53935";
    pub const WARNING_500: &str = "#f1a620";
    pub const SUCCESS_500: &str = "#43b367";
    pub const INFO_500: &str = "#6496ff";
}

/// Offsets from the viewport edge.
pub mod spacing {
    pub const SM: &str = "12px";
    pub const MD: &str = "20px";
}

/// Component sizes.
pub mod sizing {
    pub const TOAST_MAX_WIDTH: &str = "360px";
}

/// Border radii.
pub mod radius {
    pub const MD: &str = "8px";
}

/// Box shadows.
pub mod shadow {
    pub const MD: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";
}

/// Stacking order.
pub mod layer {
    /// Above Bootstrap modals (1055) so feedback stays visible.
    pub const TOAST: &str = "1080";
}

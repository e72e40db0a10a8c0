//! Style merging
//!
//! Implements the cascade rule for combining two style declarations: a
//! higher-specificity declaration overrides a lower one property by
//! property, never wholesale.

use layout_types::{BoxStyle, StyleDeclaration, TextStyle};

/// Merge inherited styles with an explicitly-set style, explicit winning.
///
/// # Example
/// ```
/// use style_resolver::merge_inherited_styles;
/// use layout_types::{StyleDeclaration, Color};
///
/// let mut inherited = StyleDeclaration::default();
/// inherited.text.font_size = Some(16.0);
/// inherited.text.color = Some(Color::rgb(0, 0, 0));
///
/// let mut explicit = StyleDeclaration::default();
/// explicit.text.font_size = Some(18.0);
///
/// let merged = merge_inherited_styles(inherited, explicit);
/// assert_eq!(merged.text.font_size, Some(18.0));
/// assert_eq!(merged.text.color, Some(Color::rgb(0, 0, 0)));
/// ```
pub fn merge_inherited_styles(
    inherited: StyleDeclaration,
    explicit: StyleDeclaration,
) -> StyleDeclaration {
    StyleDeclaration {
        text: TextStyle {
            font_family: explicit.text.font_family.or(inherited.text.font_family),
            font_size: explicit.text.font_size.or(inherited.text.font_size),
            font_weight: explicit.text.font_weight.or(inherited.text.font_weight),
            font_style: explicit.text.font_style.or(inherited.text.font_style),
            color: explicit.text.color.or(inherited.text.color),
            text_align: explicit.text.text_align.or(inherited.text.text_align),
            line_height: explicit.text.line_height.or(inherited.text.line_height),
            letter_spacing: explicit
                .text
                .letter_spacing
                .or(inherited.text.letter_spacing),
            text_transform: explicit
                .text
                .text_transform
                .or(inherited.text.text_transform),
            text_decoration: explicit
                .text
                .text_decoration
                .or(inherited.text.text_decoration),
            vertical_align: explicit.text.vertical_align,
            white_space: explicit.text.white_space,
        },
        box_model: BoxStyle {
            margin: explicit.box_model.margin,
            padding: explicit.box_model.padding,
            border_top: explicit.box_model.border_top,
            border_right: explicit.box_model.border_right,
            border_bottom: explicit.box_model.border_bottom,
            border_left: explicit.box_model.border_left,
            background_color: explicit.box_model.background_color,
            width: explicit.box_model.width,
            height: explicit.box_model.height,
            max_width: explicit.box_model.max_width,
            max_height: explicit.box_model.max_height,
            border_radius: explicit.box_model.border_radius,
            opacity: explicit.box_model.opacity,
        },
    }
}

/// Apply a higher-specificity override on top of a base, property by
/// property — unset properties in `overrides` leave `base`'s value intact.
///
/// # Example
/// ```
/// use style_resolver::merge_style_overrides;
/// use layout_types::StyleDeclaration;
///
/// let base = StyleDeclaration::default();
/// let overrides = StyleDeclaration::default();
/// let _merged = merge_style_overrides(base, overrides);
/// ```
pub fn merge_style_overrides(
    mut base: StyleDeclaration,
    overrides: StyleDeclaration,
) -> StyleDeclaration {
    if overrides.text.color.is_some() {
        base.text.color = overrides.text.color;
    }
    if overrides.text.font_size.is_some() {
        base.text.font_size = overrides.text.font_size;
    }
    if overrides.text.font_weight.is_some() {
        base.text.font_weight = overrides.text.font_weight;
    }
    if overrides.text.font_style.is_some() {
        base.text.font_style = overrides.text.font_style;
    }
    if overrides.text.font_family.is_some() {
        base.text.font_family = overrides.text.font_family;
    }
    if overrides.text.text_decoration.is_some() {
        base.text.text_decoration = overrides.text.text_decoration;
    }
    if overrides.text.text_align.is_some() {
        base.text.text_align = overrides.text.text_align;
    }
    if overrides.text.text_transform.is_some() {
        base.text.text_transform = overrides.text.text_transform;
    }
    if overrides.text.line_height.is_some() {
        base.text.line_height = overrides.text.line_height;
    }
    if overrides.text.letter_spacing.is_some() {
        base.text.letter_spacing = overrides.text.letter_spacing;
    }
    if overrides.text.vertical_align.is_some() {
        base.text.vertical_align = overrides.text.vertical_align;
    }
    if overrides.text.white_space.is_some() {
        base.text.white_space = overrides.text.white_space;
    }
    if overrides.box_model.margin.is_some() {
        base.box_model.margin = overrides.box_model.margin;
    }
    if overrides.box_model.padding.is_some() {
        base.box_model.padding = overrides.box_model.padding;
    }
    if overrides.box_model.border_top.is_some() {
        base.box_model.border_top = overrides.box_model.border_top;
    }
    if overrides.box_model.border_right.is_some() {
        base.box_model.border_right = overrides.box_model.border_right;
    }
    if overrides.box_model.border_bottom.is_some() {
        base.box_model.border_bottom = overrides.box_model.border_bottom;
    }
    if overrides.box_model.border_left.is_some() {
        base.box_model.border_left = overrides.box_model.border_left;
    }
    if overrides.box_model.background_color.is_some() {
        base.box_model.background_color = overrides.box_model.background_color;
    }
    if overrides.box_model.width.is_some() {
        base.box_model.width = overrides.box_model.width;
    }
    if overrides.box_model.height.is_some() {
        base.box_model.height = overrides.box_model.height;
    }
    if overrides.box_model.max_width.is_some() {
        base.box_model.max_width = overrides.box_model.max_width;
    }
    if overrides.box_model.max_height.is_some() {
        base.box_model.max_height = overrides.box_model.max_height;
    }
    if overrides.box_model.border_radius.is_some() {
        base.box_model.border_radius = overrides.box_model.border_radius;
    }
    if overrides.box_model.opacity.is_some() {
        base.box_model.opacity = overrides.box_model.opacity;
    }

    base
}
